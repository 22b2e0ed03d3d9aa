//! Annotation name lookup.
//!
//! Annotations are written loosely (`[Object]`, `[ObjectAttribute]`,
//! `[Dagger.SDK.Mod.Object]`, `[global::Dagger.SDK.Mod.ObjectAttribute]`)
//! but the generator looks them up by metadata name. Lookup follows the
//! host language: the `Attribute` suffix is optional, and an unqualified
//! name only binds if its namespace is in scope.

use std::fmt;
use std::sync::Arc;

use companion_foundation::ScopePath;

use crate::ast::Annotation;
use crate::scope::ScopeContext;

const ATTRIBUTE_SUFFIX: &str = "Attribute";
const GLOBAL_ALIAS: &str = "global::";

/// Fully qualified attribute type name, e.g. `Dagger.SDK.Mod.ObjectAttribute`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetadataName {
    /// Namespace the attribute type is declared in.
    pub namespace: ScopePath,
    /// Type name, including any `Attribute` suffix.
    pub name: Arc<str>,
}

impl MetadataName {
    /// Parses a fully qualified metadata name.
    #[must_use]
    pub fn parse(qualified: &str) -> Self {
        let qualified = qualified.strip_prefix(GLOBAL_ALIAS).unwrap_or(qualified);
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self {
                namespace: ScopePath::parse(namespace),
                name: Arc::from(name.trim()),
            },
            None => Self {
                namespace: ScopePath::global(),
                name: Arc::from(qualified.trim()),
            },
        }
    }

    /// Returns true if a written simple name binds to this type name.
    fn name_matches(&self, written: &str) -> bool {
        written == &*self.name
            || self
                .name
                .strip_suffix(ATTRIBUTE_SUFFIX)
                .is_some_and(|short| !short.is_empty() && short == written)
    }

    /// Returns true if `annotation`, written in `scope`, refers to this type.
    #[must_use]
    pub fn matches(&self, annotation: &Annotation, scope: &ScopeContext) -> bool {
        let written = annotation.name.trim();
        let (global, written) = match written.strip_prefix(GLOBAL_ALIAS) {
            Some(rest) => (true, rest),
            None => (false, written),
        };

        match written.rsplit_once('.') {
            Some((qualifier, simple)) => {
                if !self.name_matches(simple) {
                    return false;
                }
                let qualifier = ScopePath::parse(qualifier);
                if global {
                    qualifier == self.namespace
                } else {
                    scope
                        .namespace
                        .ancestors()
                        .any(|outer| outer.join(&qualifier) == self.namespace)
                }
            }
            None if global => self.name_matches(written) && self.namespace.is_global(),
            None => self.name_matches(written) && scope.sees(&self.namespace),
        }
    }
}

impl fmt::Display for MetadataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_global() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Returns true if any of `annotations` refers to `marker`.
#[must_use]
pub fn has_annotation(annotations: &[Annotation], scope: &ScopeContext, marker: &MetadataName) -> bool {
    annotations.iter().any(|a| marker.matches(a, scope))
}
