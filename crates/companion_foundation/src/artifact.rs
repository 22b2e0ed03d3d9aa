//! Generated source artifacts.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Suffix appended to every generated file key.
pub const GENERATED_SUFFIX: &str = ".g";

/// Extension the host gives generated files.
pub const SOURCE_EXTENSION: &str = ".cs";

/// Generated source text and the output slot it fills.
///
/// Artifacts have no identity beyond their key: emitting a second artifact
/// under the same key replaces the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Artifact {
    /// Output slot, e.g. `Example.g`.
    pub file_key: Arc<str>,
    /// Complete source text.
    pub source: Arc<str>,
}

impl Artifact {
    /// Creates an artifact.
    #[must_use]
    pub fn new(file_key: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        Self {
            file_key: file_key.into(),
            source: source.into(),
        }
    }

    /// File name the host writes this artifact to (`Example.g.cs`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{SOURCE_EXTENSION}", self.file_key)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {}", self.file_name())?;
        f.write_str(&self.source)
    }
}
