//! Declaration descriptors.
//!
//! A [`Descriptor`] is everything the synthesizer needs to know about a
//! declaration, and nothing more. It is the key of the incremental cache:
//! two descriptors that compare equal always produce byte-identical
//! output, so a run that sees an equal descriptor reuses the previous
//! artifact.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::artifact::GENERATED_SUFFIX;

// =============================================================================
// Scope Path
// =============================================================================

/// A dotted namespace path such as `My.App`.
///
/// The empty path is the global namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScopePath(Vec<Arc<str>>);

impl ScopePath {
    /// The global namespace.
    #[must_use]
    pub fn global() -> Self {
        Self::default()
    }

    /// Parses a dotted path. Empty segments are dropped, so `""` is global.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Arc::from)
                .collect(),
        )
    }

    /// Builds a path from segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[Arc<str>] {
        &self.0
    }

    /// Returns true for the global namespace.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with `other` appended.
    #[must_use]
    pub fn join(&self, other: &ScopePath) -> Self {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        Self(segments)
    }

    /// Returns true if `prefix` is this path or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &ScopePath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Iterates over this path and all its ancestors, innermost first,
    /// ending with the global namespace.
    pub fn ancestors(&self) -> impl Iterator<Item = ScopePath> + '_ {
        (0..=self.0.len()).rev().map(|n| Self(self.0[..n].to_vec()))
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for ScopePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// Stable identity of an eligible declaration.
///
/// Spans and unrelated members are not part of it: equal descriptors
/// always render the same companion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Descriptor {
    /// Namespace the declaration lives in.
    pub scope: ScopePath,
    /// Enclosing type names, outermost first. Empty for top-level types.
    pub containing_types: Vec<Arc<str>>,
    /// Simple name of the declaration.
    pub name: Arc<str>,
}

impl Descriptor {
    /// Creates a descriptor for a top-level declaration.
    #[must_use]
    pub fn new(scope: impl Into<ScopePath>, name: impl Into<Arc<str>>) -> Self {
        Self {
            scope: scope.into(),
            containing_types: Vec::new(),
            name: name.into(),
        }
    }

    /// Places this declaration inside the given enclosing types.
    #[must_use]
    pub fn nested_in<I, S>(mut self, containing_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.containing_types = containing_types.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if this declaration is nested in another type.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        !self.containing_types.is_empty()
    }

    /// Type name relative to its namespace (`Outer.Inner`).
    #[must_use]
    pub fn type_path(&self) -> String {
        let mut path = String::new();
        for outer in &self.containing_types {
            path.push_str(outer);
            path.push('.');
        }
        path.push_str(&self.name);
        path
    }

    /// Fully qualified name (`My.App.Outer.Inner`).
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.scope.is_global() {
            self.type_path()
        } else {
            format!("{}.{}", self.scope, self.type_path())
        }
    }

    /// Output slot for this declaration's companion (`Example.g`).
    ///
    /// Derived from the type path only, so repeated synthesis for the same
    /// declaration always replaces the same output.
    #[must_use]
    pub fn file_key(&self) -> String {
        format!("{}{GENERATED_SUFFIX}", self.type_path())
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}
