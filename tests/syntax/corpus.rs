//! Integration tests for the document corpus
//!
//! Tests revision tracking, identity of documents, and removal.

use companion_foundation::ErrorKind;
use companion_syntax::{Change, CompilationUnit, Corpus, NamespaceDecl, TypeDecl};

fn unit(name: &str) -> CompilationUnit {
    CompilationUnit::new().with_item(NamespaceDecl::file_scoped("My.App").with_item(TypeDecl::class(name)))
}

// =============================================================================
// Upsert
// =============================================================================

#[test]
fn upsert_adds_then_modifies() {
    let mut corpus = Corpus::new();
    let added = corpus.upsert("a.cs", unit("A"));
    assert!(matches!(added, Change::Added(_)));
    assert_eq!(corpus.revision(), 1);

    let modified = corpus.upsert("a.cs", unit("B"));
    assert!(matches!(modified, Change::Modified(_)));
    assert_eq!(modified.document(), added.document());
    assert_eq!(corpus.get("a.cs").unwrap().revision, 2);
    assert_eq!(corpus.len(), 1);
}

#[test]
fn identical_tree_keeps_revision() {
    let mut corpus = Corpus::new();
    corpus.upsert("a.cs", unit("A"));
    corpus.upsert("b.cs", unit("B"));

    let change = corpus.upsert("a.cs", unit("A"));
    assert!(matches!(change, Change::Unchanged(_)));
    assert_eq!(corpus.revision(), 2);
    assert_eq!(corpus.get("a.cs").unwrap().revision, 1);
}

#[test]
fn documents_iterate_in_insertion_order() {
    let mut corpus = Corpus::new();
    for path in ["z.cs", "a.cs", "m.cs"] {
        corpus.upsert(path, CompilationUnit::new());
    }
    let paths: Vec<&str> = corpus.documents().map(|d| &*d.path).collect();
    assert_eq!(paths, vec!["z.cs", "a.cs", "m.cs"]);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn remove_forgets_document() {
    let mut corpus = Corpus::new();
    let id = corpus.upsert("a.cs", unit("A")).document();
    assert_eq!(corpus.remove("a.cs").unwrap(), id);

    assert!(corpus.is_empty());
    assert!(!corpus.contains(id));
    assert!(corpus.document(id).is_none());
}

#[test]
fn readded_path_gets_new_identity() {
    let mut corpus = Corpus::new();
    let first = corpus.upsert("a.cs", unit("A")).document();
    corpus.remove("a.cs").unwrap();
    let second = corpus.upsert("a.cs", unit("A")).document();
    assert_ne!(first, second);
}

#[test]
fn remove_unknown_path_fails() {
    let mut corpus = Corpus::new();
    let err = corpus.remove("missing.cs").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DocumentNotFound(ref p) if p == "missing.cs"));
    assert_eq!(corpus.revision(), 0);
}
