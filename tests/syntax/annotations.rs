//! Integration tests for annotation lookup
//!
//! Tests how written annotation names bind to metadata names in scope.

use companion_syntax::{Annotation, MetadataName, ScopeContext, has_annotation};

fn marker() -> MetadataName {
    MetadataName::parse("Dagger.SDK.Mod.ObjectAttribute")
}

fn matches(written: &str, scope: &ScopeContext) -> bool {
    marker().matches(&Annotation::new(written), scope)
}

// =============================================================================
// Simple Names
// =============================================================================

#[test]
fn simple_name_needs_import() {
    let imported = ScopeContext::in_namespace("My.App").with_import("Dagger.SDK.Mod");
    let bare = ScopeContext::in_namespace("My.App");

    assert!(matches("Object", &imported));
    assert!(matches("ObjectAttribute", &imported));
    assert!(!matches("Object", &bare));
}

#[test]
fn simple_name_binds_inside_declaring_namespace() {
    let scope = ScopeContext::in_namespace("Dagger.SDK.Mod.Samples");
    assert!(matches("Object", &scope));
}

#[test]
fn other_names_do_not_bind() {
    let scope = ScopeContext::global().with_import("Dagger.SDK.Mod");
    assert!(!matches("Function", &scope));
    assert!(!matches("Objects", &scope));
    assert!(!matches("Attribute", &scope));
}

// =============================================================================
// Qualified Names
// =============================================================================

#[test]
fn fully_qualified_name_binds_anywhere() {
    let scope = ScopeContext::in_namespace("Elsewhere");
    assert!(matches("Dagger.SDK.Mod.Object", &scope));
    assert!(matches("Dagger.SDK.Mod.ObjectAttribute", &scope));
}

#[test]
fn partially_qualified_name_resolves_against_enclosing_namespaces() {
    assert!(matches("Mod.Object", &ScopeContext::in_namespace("Dagger.SDK")));
    assert!(matches("SDK.Mod.Object", &ScopeContext::in_namespace("Dagger.Other")));
    assert!(!matches("Mod.Object", &ScopeContext::in_namespace("My.App")));
}

#[test]
fn global_alias_requires_full_qualification() {
    let scope = ScopeContext::in_namespace("Dagger.SDK");
    assert!(matches("global::Dagger.SDK.Mod.Object", &scope));
    assert!(!matches("global::Mod.Object", &scope));
}

#[test]
fn has_annotation_checks_every_annotation() {
    let scope = ScopeContext::global().with_import("Dagger.SDK.Mod");
    let annotations = vec![Annotation::new("Serializable"), Annotation::new("Object")];
    assert!(has_annotation(&annotations, &scope, &marker()));
    assert!(!has_annotation(&annotations[..1], &scope, &marker()));
}

#[test]
fn metadata_name_display() {
    assert_eq!(marker().to_string(), "Dagger.SDK.Mod.ObjectAttribute");
    assert_eq!(MetadataName::parse("Plain").to_string(), "Plain");
}
