//! Integration tests for filtering and resolution
//!
//! Tests the eligibility decision and descriptor stability.

use companion_foundation::{Descriptor, ScopePath};
use companion_pipeline::{
    CompanionSynthesizer, Eligibility, EligibilityFilter, ScopeResolver, SymbolResolver,
};
use companion_syntax::{
    CompilationUnit, Corpus, DeclarationNode, MetadataName, Modifier, NamespaceDecl, TypeDecl,
};

fn node_in(namespace: &str, decl: TypeDecl) -> DeclarationNode {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "a.cs",
        CompilationUnit::new()
            .with_using("Dagger.SDK.Mod")
            .with_item(NamespaceDecl::file_scoped(namespace).with_item(decl)),
    );
    corpus.get("a.cs").unwrap().nodes().remove(0)
}

fn decl(marked: bool, partial: bool) -> TypeDecl {
    let mut decl = TypeDecl::class("Example").with_modifier(Modifier::Public);
    if partial {
        decl = decl.with_modifier(Modifier::Partial);
    }
    if marked {
        decl = decl.annotated("Object");
    }
    decl
}

// =============================================================================
// Eligibility
// =============================================================================

#[test]
fn eligibility_requires_marker_and_partial() {
    let filter = EligibilityFilter::default();
    let cases = [
        (false, false, Eligibility::Unmarked),
        (true, false, Eligibility::NotExtensible),
        (false, true, Eligibility::Unmarked),
        (true, true, Eligibility::Eligible),
    ];

    for (marked, partial, expected) in cases {
        let node = node_in("My.App", decl(marked, partial));
        assert_eq!(filter.classify(&node), expected, "marked={marked} partial={partial}");
        assert_eq!(
            filter.is_eligible(&node),
            marked && partial,
            "marked={marked} partial={partial}"
        );
    }
}

#[test]
fn custom_marker() {
    let filter = EligibilityFilter::new(MetadataName::parse("Acme.ComponentAttribute"));
    let node = node_in(
        "Acme.Parts",
        TypeDecl::class("Widget").public_partial().annotated("Component"),
    );
    assert!(filter.is_eligible(&node));
    assert!(!EligibilityFilter::default().is_eligible(&node));
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn resolving_unchanged_node_is_stable() {
    let node = node_in("My.App", decl(true, true));
    let resolver = ScopeResolver;
    assert_eq!(resolver.resolve(&node), resolver.resolve(&node));
    assert_eq!(resolver.resolve(&node), Descriptor::new("My.App", "Example"));
}

#[test]
fn same_name_in_different_scopes_differs() {
    let a = ScopeResolver.resolve(&node_in("A", decl(true, true)));
    let b = ScopeResolver.resolve(&node_in("B", decl(true, true)));
    assert_ne!(a, b);
}

#[test]
fn edits_outside_identity_keep_descriptor() {
    let before = node_in("My.App", decl(true, true));
    let after = node_in(
        "My.App",
        decl(true, true).with_modifier(Modifier::Sealed).annotated("Serializable"),
    );
    assert_ne!(before, after);
    assert_eq!(ScopeResolver.resolve(&before), ScopeResolver.resolve(&after));
}

#[test]
fn global_declaration_resolves_to_empty_scope() {
    let mut corpus = Corpus::new();
    corpus.upsert("a.cs", CompilationUnit::new().with_item(TypeDecl::class("Example")));
    let node = corpus.get("a.cs").unwrap().nodes().remove(0);
    assert_eq!(ScopeResolver.resolve(&node).scope, ScopePath::global());
}

// =============================================================================
// Synthesis
// =============================================================================

#[test]
fn synthesis_is_deterministic_across_instances() {
    let d = ScopeResolver.resolve(&node_in("My.App", decl(true, true)));
    let first = CompanionSynthesizer::default().synthesize(&d);
    let second = CompanionSynthesizer::default().synthesize(&d.clone());
    assert_eq!(first.source.as_bytes(), second.source.as_bytes());
    assert_eq!(first.file_key, second.file_key);
}
