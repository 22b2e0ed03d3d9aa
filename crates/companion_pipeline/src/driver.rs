//! The generator driver.
//!
//! [`Generator`] keeps a sink consistent with a changing corpus. Each run:
//!
//! 1. Walks only documents whose revision moved since the last run,
//!    filtering and resolving their declarations.
//! 2. Collects the descriptors of every document into output slots. A
//!    slot claimed by two different entities is left empty and reported
//!    in [`RunReport::collisions`]; the other slots are unaffected.
//! 3. Synthesizes companions for descriptors not in the artifact cache.
//! 4. Adds artifacts whose slot is new or whose descriptor changed, and
//!    removes slots that no longer have a declaration.
//!
//! The two static emissions are produced once, by
//! [`Generator::initialize`], independent of the corpus. A run initializes
//! before it looks at any document.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use companion_foundation::{Descriptor, Error, ErrorContext, Result};
use companion_syntax::{Corpus, Document};
use tracing::{debug, trace, warn};

use crate::cache::{ArtifactCache, DocumentEntry, DocumentMemo};
use crate::config::GeneratorConfig;
use crate::contract;
use crate::diagnostic::Diagnostic;
use crate::filter::{Eligibility, EligibilityFilter};
use crate::resolve::{ScopeResolver, SymbolResolver};
use crate::sink::EmissionSink;
use crate::synthesize::CompanionSynthesizer;

// =============================================================================
// Cancellation
// =============================================================================

/// Lets the host abandon a run that an edit has superseded.
///
/// Clones share the flag. The generator checks it between documents and
/// once more before touching the sink.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Creates an unset flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self, stage: &str) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::cancelled().with_context(ErrorContext::new().with_stage(stage)));
        }
        Ok(())
    }
}

// =============================================================================
// Run Report
// =============================================================================

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Generation number of the run.
    pub generation: u64,
    /// Documents walked because their revision moved.
    pub documents_scanned: usize,
    /// Documents whose previous results were reused.
    pub documents_reused: usize,
    /// Declarations looked at in scanned documents.
    pub nodes_visited: usize,
    /// Descriptor resolutions performed.
    pub resolved: usize,
    /// Synthesizer invocations.
    pub synthesized: usize,
    /// Artifacts served from the cache.
    pub reused: usize,
    /// Artifacts handed to the sink.
    pub emitted: usize,
    /// Artifacts withdrawn from the sink.
    pub removed: usize,
    /// Output slots left empty because several entities claimed them.
    pub collisions: usize,
}

/// Result of a successful run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Counters.
    pub stats: RunStats,
    /// Diagnostics; empty unless `report_ineligible` is enabled.
    pub diagnostics: Vec<Diagnostic>,
    /// One `DuplicateFileKey` error per contested output slot.
    pub collisions: Vec<Error>,
}

// =============================================================================
// Generator
// =============================================================================

/// Incremental companion generator.
#[derive(Debug)]
pub struct Generator<R = ScopeResolver> {
    config: GeneratorConfig,
    filter: EligibilityFilter,
    resolver: R,
    synthesizer: CompanionSynthesizer,
    artifacts: ArtifactCache,
    documents: DocumentMemo,
    /// Descriptor currently held by the sink under each file key.
    emitted: BTreeMap<Arc<str>, Descriptor>,
    initialized: bool,
    generation: u64,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Creates a generator that resolves declarations from their lexical scope.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_resolver(config, ScopeResolver)
    }
}

impl<R: SymbolResolver> Generator<R> {
    /// Creates a generator with a host-provided resolver.
    #[must_use]
    pub fn with_resolver(config: GeneratorConfig, resolver: R) -> Self {
        Self {
            synthesizer: CompanionSynthesizer::new(&config),
            config,
            filter: EligibilityFilter::default(),
            resolver,
            artifacts: ArtifactCache::new(),
            documents: DocumentMemo::default(),
            emitted: BTreeMap::new(),
            initialized: false,
            generation: 0,
        }
    }

    /// Replaces the eligibility filter.
    #[must_use]
    pub fn with_filter(mut self, filter: EligibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns true once the static emissions were produced.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of completed or attempted runs.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of artifacts held in the cache.
    #[must_use]
    pub fn cached_artifacts(&self) -> usize {
        self.artifacts.len()
    }

    /// File keys of companions currently held by the sink.
    pub fn emitted_keys(&self) -> impl Iterator<Item = &str> {
        self.emitted.keys().map(AsRef::as_ref)
    }

    /// Emits the attribute and contract definitions.
    ///
    /// Only the first call emits; later calls return `Ok(false)`.
    ///
    /// # Errors
    /// Returns an error if the sink refuses a static emission.
    pub fn initialize<S: EmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        if self.initialized {
            return Ok(false);
        }
        for artifact in contract::static_emissions() {
            debug!(file_key = %artifact.file_key, "emitting static source");
            sink.add_source(&artifact)?;
        }
        self.initialized = true;
        Ok(true)
    }

    /// Brings `sink` in line with `corpus`.
    ///
    /// Initializes first if [`Generator::initialize`] was never called.
    ///
    /// Declarations whose output slot is contested get no companion; the
    /// contest is listed in [`RunReport::collisions`].
    ///
    /// # Errors
    /// Returns an error if the sink refuses an artifact.
    pub fn run<S: EmissionSink + ?Sized>(&mut self, corpus: &Corpus, sink: &mut S) -> Result<RunReport> {
        self.run_with_cancellation(corpus, sink, &CancellationFlag::default())
    }

    /// Like [`Generator::run`], but gives up when `cancel` is set.
    ///
    /// Cancellation is observed before any companion is added or removed;
    /// an abandoned run leaves the companions exactly as the previous run
    /// left them. The static emissions do not depend on the corpus and may
    /// already be in place.
    ///
    /// # Errors
    /// Returns `Cancelled` if the flag was set, plus the errors of
    /// [`Generator::run`].
    pub fn run_with_cancellation<S: EmissionSink + ?Sized>(
        &mut self,
        corpus: &Corpus,
        sink: &mut S,
        cancel: &CancellationFlag,
    ) -> Result<RunReport> {
        self.generation += 1;
        self.artifacts.advance_generation();
        self.documents.retain(|id| corpus.contains(id));

        cancel.check("initialize")?;
        self.initialize(sink)?;

        let mut report = RunReport {
            stats: RunStats {
                generation: self.generation,
                ..RunStats::default()
            },
            ..RunReport::default()
        };

        let claims = self.collect(corpus, cancel, &mut report)?;
        let current = settle(claims, &mut report);
        cancel.check("emit")?;

        self.emit(&current, sink, &mut report.stats)?;

        let evicted = self.artifacts.evict_stale();
        let stats = &report.stats;
        debug!(
            generation = stats.generation,
            documents = self.documents.len(),
            scanned = stats.documents_scanned,
            synthesized = stats.synthesized,
            reused = stats.reused,
            emitted = stats.emitted,
            removed = stats.removed,
            collisions = stats.collisions,
            evicted,
            "generation complete"
        );
        Ok(report)
    }

    /// Gathers every claim on every output slot in the corpus.
    fn collect(
        &mut self,
        corpus: &Corpus,
        cancel: &CancellationFlag,
        report: &mut RunReport,
    ) -> Result<Claims> {
        let mut claims = Claims::new();

        for doc in corpus.documents() {
            cancel.check("collect")?;

            if self.documents.is_fresh(doc.id, doc.revision) {
                trace!(path = %doc.path, revision = doc.revision, "reusing document");
                report.stats.documents_reused += 1;
            } else {
                let entry = self.scan(doc, &mut report.stats);
                self.documents.insert(doc.id, entry);
                report.stats.documents_scanned += 1;
            }

            let entry = self.documents.get(doc.id).ok_or_else(|| {
                Error::internal("document memo lost a fresh entry")
                    .with_context(ErrorContext::new().with_document(&*doc.path))
            })?;
            report.diagnostics.extend(entry.diagnostics.iter().cloned());
            for descriptor in &entry.descriptors {
                claim(&mut claims, descriptor, &doc.path);
            }
        }

        Ok(claims)
    }

    /// Filters and resolves every declaration of one document.
    fn scan(&self, doc: &Document, stats: &mut RunStats) -> DocumentEntry {
        let mut entry = DocumentEntry {
            revision: doc.revision,
            ..DocumentEntry::default()
        };

        for node in doc.nodes() {
            stats.nodes_visited += 1;
            match self.filter.classify(&node) {
                Eligibility::Eligible => {
                    stats.resolved += 1;
                    entry.descriptors.push(self.resolver.resolve(&node));
                }
                Eligibility::NotExtensible if self.config.report_ineligible => {
                    entry.diagnostics.push(Diagnostic::not_extensible(&node));
                }
                Eligibility::NotExtensible | Eligibility::Unmarked => {}
            }
        }

        trace!(
            path = %doc.path,
            revision = doc.revision,
            eligible = entry.descriptors.len(),
            "scanned document"
        );
        entry
    }

    /// Synthesizes what is missing and reconciles the sink.
    fn emit<S: EmissionSink + ?Sized>(
        &mut self,
        current: &BTreeMap<Arc<str>, Descriptor>,
        sink: &mut S,
        stats: &mut RunStats,
    ) -> Result<()> {
        for (file_key, descriptor) in current {
            let artifact = if let Some(artifact) = self.artifacts.fetch(descriptor) {
                stats.reused += 1;
                artifact
            } else {
                trace!(%descriptor, "synthesizing companion");
                stats.synthesized += 1;
                let artifact = self.synthesizer.synthesize(descriptor);
                self.artifacts.insert(descriptor.clone(), artifact.clone());
                artifact
            };

            if self.emitted.get(file_key) != Some(descriptor) {
                sink.add_source(&artifact)?;
                self.emitted.insert(file_key.clone(), descriptor.clone());
                stats.emitted += 1;
            }
        }

        let stale: Vec<Arc<str>> = self
            .emitted
            .keys()
            .filter(|key| !current.contains_key(*key))
            .cloned()
            .collect();
        for file_key in stale {
            trace!(%file_key, "withdrawing companion");
            sink.remove_source(&file_key);
            self.emitted.remove(&file_key);
            stats.removed += 1;
        }

        Ok(())
    }
}

/// Claimants of each output slot: distinct descriptors, each with the
/// first document that declared it.
type Claims = BTreeMap<Arc<str>, Vec<(Descriptor, Arc<str>)>>;

/// Records that `document` declares `descriptor`.
///
/// Several parts of one partial class resolve to the same descriptor and
/// share a claim.
fn claim(claims: &mut Claims, descriptor: &Descriptor, document: &Arc<str>) {
    let claimants = claims.entry(Arc::from(descriptor.file_key())).or_default();
    if claimants.iter().all(|(d, _)| d != descriptor) {
        claimants.push((descriptor.clone(), Arc::clone(document)));
    }
}

/// Keeps the slots with exactly one claimant and reports the rest.
///
/// Slots reserved for the static emissions are always contested.
fn settle(claims: Claims, report: &mut RunReport) -> BTreeMap<Arc<str>, Descriptor> {
    let mut current = BTreeMap::new();

    for (file_key, mut claimants) in claims {
        claimants.sort_by(|a, b| a.0.cmp(&b.0));
        let collision = match claimants.as_slice() {
            [(incoming, document), ..] if contract::is_reserved(&file_key) => Some(
                Error::duplicate_file_key(&*file_key, "static emission", incoming.qualified_name())
                    .with_context(ErrorContext::new().with_document(&**document)),
            ),
            [(existing, _), (incoming, document), ..] => Some(
                Error::duplicate_file_key(
                    &*file_key,
                    existing.qualified_name(),
                    incoming.qualified_name(),
                )
                .with_context(ErrorContext::new().with_document(&**document)),
            ),
            _ => None,
        };

        match collision {
            Some(error) => {
                warn!(%file_key, claimants = claimants.len(), "{error}");
                report.stats.collisions += 1;
                report.collisions.push(error);
            }
            None => {
                if let Some((descriptor, _)) = claimants.pop() {
                    current.insert(file_key, descriptor);
                }
            }
        }
    }

    current
}
