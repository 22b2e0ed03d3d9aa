//! Integration tests for descriptors and artifacts
//!
//! Tests scope paths, descriptor identity, and output slot derivation.

use std::collections::HashSet;

use companion_foundation::{Artifact, Descriptor, ScopePath};
use proptest::prelude::*;

// =============================================================================
// Scope Paths
// =============================================================================

#[test]
fn scope_path_parse_and_display() {
    let path = ScopePath::parse("My.App.Core");
    assert_eq!(path.len(), 3);
    assert_eq!(path.to_string(), "My.App.Core");
}

#[test]
fn scope_path_empty_is_global() {
    assert!(ScopePath::parse("").is_global());
    assert_eq!(ScopePath::global().to_string(), "");
}

#[test]
fn scope_path_ancestors_end_at_global() {
    let path = ScopePath::parse("A.B");
    let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
    assert_eq!(ancestors, vec!["A.B", "A", ""]);
}

#[test]
fn scope_path_join() {
    let joined = ScopePath::parse("A").join(&ScopePath::parse("B.C"));
    assert_eq!(joined, ScopePath::parse("A.B.C"));
    assert!(joined.starts_with(&ScopePath::parse("A.B")));
    assert!(!joined.starts_with(&ScopePath::parse("B")));
}

// =============================================================================
// Descriptor Identity
// =============================================================================

#[test]
fn descriptor_file_key_uses_simple_name() {
    let d = Descriptor::new("My.App", "Example");
    assert_eq!(d.file_key(), "Example.g");
    assert_eq!(d.qualified_name(), "My.App.Example");
}

#[test]
fn descriptor_nested_key_includes_outer_types() {
    let d = Descriptor::new("My.App", "Inner").nested_in(["Outer"]);
    assert!(d.is_nested());
    assert_eq!(d.file_key(), "Outer.Inner.g");
    assert_eq!(d.qualified_name(), "My.App.Outer.Inner");
}

#[test]
fn descriptor_global_qualified_name() {
    let d = Descriptor::new(ScopePath::global(), "Example");
    assert_eq!(d.qualified_name(), "Example");
}

#[test]
fn descriptors_differ_by_scope_but_share_key() {
    let a = Descriptor::new("A", "Example");
    let b = Descriptor::new("B", "Example");
    assert_ne!(a, b);
    assert_eq!(a.file_key(), b.file_key());

    let set: HashSet<_> = [a.clone(), b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Artifacts
// =============================================================================

#[test]
fn artifact_display_names_file() {
    let artifact = Artifact::new("Example.g", "partial class Example {}\n");
    assert_eq!(
        artifact.to_string(),
        "// Example.g.cs\npartial class Example {}\n"
    );
}

proptest! {
    #[test]
    fn descriptor_identity_is_structural(
        scope in "[A-Z][a-z]{0,5}(\\.[A-Z][a-z]{0,5}){0,3}",
        name in "[A-Z][a-zA-Z0-9]{0,8}",
    ) {
        let a = Descriptor::new(scope.as_str(), name.as_str());
        let b = Descriptor::new(ScopePath::parse(&scope), name.as_str());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.file_key(), format!("{name}.g"));
        prop_assert_eq!(a.qualified_name(), format!("{scope}.{name}"));
    }
}
