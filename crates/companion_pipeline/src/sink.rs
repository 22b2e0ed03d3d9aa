//! Emission sinks.
//!
//! The host's output mechanism sits behind [`EmissionSink`]. The generator
//! only ever adds an artifact (replacing anything under the same key) or
//! removes one whose declaration went away.

use std::collections::BTreeMap;
use std::sync::Arc;

use companion_foundation::{Artifact, Result};

/// Receiver of generated sources.
pub trait EmissionSink {
    /// Adds or replaces the artifact under its file key.
    ///
    /// # Errors
    /// Implementations may refuse an artifact; the error aborts the run.
    fn add_source(&mut self, artifact: &Artifact) -> Result<()>;

    /// Removes the artifact under `file_key`, if present.
    fn remove_source(&mut self, file_key: &str);
}

impl<S: EmissionSink + ?Sized> EmissionSink for &mut S {
    fn add_source(&mut self, artifact: &Artifact) -> Result<()> {
        (**self).add_source(artifact)
    }

    fn remove_source(&mut self, file_key: &str) {
        (**self).remove_source(file_key);
    }
}

/// In-memory sink that mirrors what the host would hold.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    sources: BTreeMap<Arc<str>, Artifact>,
    adds: usize,
    removes: usize,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an artifact by file key.
    #[must_use]
    pub fn get(&self, file_key: &str) -> Option<&Artifact> {
        self.sources.get(file_key)
    }

    /// Source text under `file_key`.
    #[must_use]
    pub fn source(&self, file_key: &str) -> Option<&str> {
        self.get(file_key).map(|a| &*a.source)
    }

    /// Returns true if an artifact is held under `file_key`.
    #[must_use]
    pub fn contains(&self, file_key: &str) -> bool {
        self.sources.contains_key(file_key)
    }

    /// File keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(AsRef::as_ref)
    }

    /// Artifacts in file key order.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.sources.values()
    }

    /// Number of held artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no artifacts are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total number of `add_source` calls received.
    #[must_use]
    pub fn add_count(&self) -> usize {
        self.adds
    }

    /// Total number of `remove_source` calls that removed something.
    #[must_use]
    pub fn remove_count(&self) -> usize {
        self.removes
    }
}

impl EmissionSink for MemorySink {
    fn add_source(&mut self, artifact: &Artifact) -> Result<()> {
        self.adds += 1;
        self.sources
            .insert(artifact.file_key.clone(), artifact.clone());
        Ok(())
    }

    fn remove_source(&mut self, file_key: &str) {
        if self.sources.remove(file_key).is_some() {
            self.removes += 1;
        }
    }
}
