//! Incremental caches.
//!
//! Two layers keep re-runs cheap:
//! - [`DocumentMemo`] remembers, per document revision, which descriptors
//!   the document produced. An untouched document is not walked again.
//! - [`ArtifactCache`] is content-addressed by [`Descriptor`]. A descriptor
//!   seen before reuses its artifact without calling the synthesizer.
//!
//! Both only ever hold pure results, so an abandoned run leaves them valid.

use std::collections::HashMap;

use companion_foundation::{Artifact, Descriptor};
use companion_syntax::DocumentId;

use crate::diagnostic::Diagnostic;

// =============================================================================
// Artifact Cache
// =============================================================================

/// Cached artifact for a descriptor.
#[derive(Clone, Debug)]
struct CachedArtifact {
    artifact: Artifact,
    /// Generation in which the descriptor was last seen.
    generation: u64,
}

/// Cache from descriptor to synthesized artifact.
///
/// Entries not touched during a generation are dropped by
/// [`ArtifactCache::evict_stale`], so a descriptor that disappears from the
/// corpus does not keep its artifact alive.
#[derive(Clone, Debug, Default)]
pub struct ArtifactCache {
    entries: HashMap<Descriptor, CachedArtifact>,
    generation: u64,
}

impl ArtifactCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation.
    pub fn advance_generation(&mut self) {
        self.generation += 1;
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Looks up an artifact, marking it as seen in this generation.
    pub fn fetch(&mut self, descriptor: &Descriptor) -> Option<Artifact> {
        let generation = self.generation;
        self.entries.get_mut(descriptor).map(|cached| {
            cached.generation = generation;
            cached.artifact.clone()
        })
    }

    /// Looks up an artifact without touching it.
    #[must_use]
    pub fn peek(&self, descriptor: &Descriptor) -> Option<&Artifact> {
        self.entries.get(descriptor).map(|c| &c.artifact)
    }

    /// Stores an artifact for the current generation.
    pub fn insert(&mut self, descriptor: Descriptor, artifact: Artifact) {
        self.entries.insert(
            descriptor,
            CachedArtifact {
                artifact,
                generation: self.generation,
            },
        );
    }

    /// Drops entries not seen in the current generation.
    /// Returns the number of evicted entries.
    pub fn evict_stale(&mut self) -> usize {
        let generation = self.generation;
        let before = self.entries.len();
        self.entries.retain(|_, c| c.generation == generation);
        before - self.entries.len()
    }

    /// Number of cached artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all cached artifacts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// =============================================================================
// Document Memo
// =============================================================================

/// What one document revision produced.
#[derive(Clone, Debug, Default)]
pub(crate) struct DocumentEntry {
    pub(crate) revision: u64,
    pub(crate) descriptors: Vec<Descriptor>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

/// Per-document results, keyed by document and valid for one revision.
#[derive(Clone, Debug, Default)]
pub(crate) struct DocumentMemo {
    entries: HashMap<DocumentId, DocumentEntry>,
}

impl DocumentMemo {
    /// Returns true if `id` was scanned at exactly `revision`.
    pub(crate) fn is_fresh(&self, id: DocumentId, revision: u64) -> bool {
        self.entries.get(&id).is_some_and(|e| e.revision == revision)
    }

    pub(crate) fn get(&self, id: DocumentId) -> Option<&DocumentEntry> {
        self.entries.get(&id)
    }

    pub(crate) fn insert(&mut self, id: DocumentId, entry: DocumentEntry) {
        self.entries.insert(id, entry);
    }

    /// Forgets documents for which `keep` returns false.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(DocumentId) -> bool) {
        self.entries.retain(|id, _| keep(*id));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
