//! Eligibility filter.
//!
//! A declaration takes part in generation iff it carries the marker and is
//! open to extension. Everything else is skipped without comment.

use companion_syntax::{DeclarationNode, MetadataName, has_annotation};

use crate::contract;

/// Outcome of classifying one declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// Marked and extensible.
    Eligible,
    /// No marker annotation.
    Unmarked,
    /// Marked, but a companion could not merge into it.
    NotExtensible,
}

/// Predicate over declaration nodes.
#[derive(Clone, Debug)]
pub struct EligibilityFilter {
    marker: MetadataName,
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::new(contract::object_marker())
    }
}

impl EligibilityFilter {
    /// Creates a filter for the given marker.
    #[must_use]
    pub fn new(marker: MetadataName) -> Self {
        Self { marker }
    }

    /// The marker this filter looks for.
    #[must_use]
    pub fn marker(&self) -> &MetadataName {
        &self.marker
    }

    /// Returns true if `node` carries the marker.
    #[must_use]
    pub fn is_marked(&self, node: &DeclarationNode) -> bool {
        has_annotation(&node.annotations, &node.scope, &self.marker)
    }

    /// Classifies a node.
    #[must_use]
    pub fn classify(&self, node: &DeclarationNode) -> Eligibility {
        if !self.is_marked(node) {
            Eligibility::Unmarked
        } else if !node.is_extensible() {
            Eligibility::NotExtensible
        } else {
            Eligibility::Eligible
        }
    }

    /// Returns true iff `node` is marked and extensible.
    #[must_use]
    pub fn is_eligible(&self, node: &DeclarationNode) -> bool {
        self.classify(node) == Eligibility::Eligible
    }
}
