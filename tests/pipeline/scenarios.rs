//! End-to-end generation scenarios
//!
//! Tests what a single run emits for small corpora.

use companion_pipeline::contract::{ATTRIBUTES_FILE_KEY, INTERFACES_FILE_KEY};
use companion_pipeline::{
    Generator, GeneratorConfig, MemorySink, NOT_EXTENSIBLE, Severity,
};
use companion_syntax::{CompilationUnit, Corpus, Modifier, NamespaceDecl, TypeDecl};

fn run(corpus: &Corpus) -> MemorySink {
    let mut sink = MemorySink::new();
    Generator::new(GeneratorConfig::default())
        .run(corpus, &mut sink)
        .unwrap();
    sink
}

fn single(decl: TypeDecl) -> Corpus {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new()
            .with_using("Dagger.SDK.Mod")
            .with_item(NamespaceDecl::file_scoped("My.App").with_item(decl)),
    );
    corpus
}

fn companions(sink: &MemorySink) -> Vec<&str> {
    sink.keys()
        .filter(|k| *k != ATTRIBUTES_FILE_KEY && *k != INTERFACES_FILE_KEY)
        .collect()
}

// =============================================================================
// Basic Scenarios
// =============================================================================

#[test]
fn marked_partial_class_gets_companion() {
    let sink = run(&single(
        TypeDecl::class("Example").public_partial().annotated("Object"),
    ));

    assert_eq!(companions(&sink), vec!["Example.g"]);
    let source = sink.source("Example.g").unwrap();
    assert!(source.contains("namespace My.App;"));
    assert!(source.contains("partial class Example : IDagSetter"));
    assert_eq!(source.matches("private Query _dag;").count(), 1);
    assert_eq!(source.matches("public void SetDag(Query dag)").count(), 1);
    assert!(source.contains("_dag = dag;"));
    assert_eq!(sink.get("Example.g").unwrap().file_name(), "Example.g.cs");
}

#[test]
fn marked_non_partial_class_is_skipped() {
    let sink = run(&single(
        TypeDecl::class("Example")
            .with_modifier(Modifier::Public)
            .annotated("Object"),
    ));
    assert!(companions(&sink).is_empty());
}

#[test]
fn unmarked_partial_class_is_skipped() {
    let sink = run(&single(TypeDecl::class("Example").public_partial()));
    assert!(companions(&sink).is_empty());
}

#[test]
fn marked_partial_struct_is_skipped() {
    let sink = run(&single(
        TypeDecl::structure("Example")
            .with_modifier(Modifier::Partial)
            .annotated("Object"),
    ));
    assert!(companions(&sink).is_empty());
}

#[test]
fn statics_emitted_once_for_empty_corpus() {
    let corpus = Corpus::new();
    let mut generator = Generator::default();
    let mut sink = MemorySink::new();

    generator.run(&corpus, &mut sink).unwrap();
    generator.run(&corpus, &mut sink).unwrap();
    assert!(!generator.initialize(&mut sink).unwrap());

    assert_eq!(
        sink.keys().collect::<Vec<_>>(),
        vec![ATTRIBUTES_FILE_KEY, INTERFACES_FILE_KEY]
    );
    assert_eq!(sink.add_count(), 2);
    let attributes = sink.source(ATTRIBUTES_FILE_KEY).unwrap();
    assert!(attributes.contains("AttributeTargets.Class"));
    assert!(attributes.contains("AttributeTargets.Method"));
    assert!(sink.source(INTERFACES_FILE_KEY).unwrap().contains("void SetDag(Query dag);"));
}

// =============================================================================
// Scopes
// =============================================================================

#[test]
fn global_declaration_has_no_namespace() {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new()
            .with_using("Dagger.SDK.Mod")
            .with_item(TypeDecl::class("Example").public_partial().annotated("Object")),
    );
    let sink = run(&corpus);
    let source = sink.source("Example.g").unwrap();
    assert!(!source.contains("namespace"));
    assert!(source.contains("partial class Example : IDagSetter"));
}

#[test]
fn block_namespaces_nest_into_scope() {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new().with_item(
            NamespaceDecl::new("My").with_item(
                NamespaceDecl::new("App")
                    .with_item(TypeDecl::class("Example").public_partial().annotated("Dagger.SDK.Mod.Object")),
            ),
        ),
    );
    let sink = run(&corpus);
    assert!(sink.source("Example.g").unwrap().contains("namespace My.App;"));
}

#[test]
fn nested_objects_get_shells_and_distinct_keys() {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new().with_using("Dagger.SDK.Mod").with_item(
            NamespaceDecl::file_scoped("My.App")
                .with_item(
                    TypeDecl::class("First")
                        .public_partial()
                        .with_member(TypeDecl::class("Inner").public_partial().annotated("Object")),
                )
                .with_item(
                    TypeDecl::class("Second")
                        .public_partial()
                        .with_member(TypeDecl::class("Inner").public_partial().annotated("Object")),
                ),
        ),
    );
    let sink = run(&corpus);
    assert_eq!(companions(&sink), vec!["First.Inner.g", "Second.Inner.g"]);
    assert!(sink
        .source("First.Inner.g")
        .unwrap()
        .contains("partial class First\n{\n    partial class Inner : IDagSetter\n"));
}

#[test]
fn objects_inside_closed_types_are_skipped() {
    let inner = || TypeDecl::class("Inner").public_partial().annotated("Object");
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new().with_using("Dagger.SDK.Mod").with_item(
            NamespaceDecl::file_scoped("My.App")
                .with_item(
                    TypeDecl::structure("Holder")
                        .with_modifier(Modifier::Partial)
                        .with_member(inner()),
                )
                .with_item(
                    TypeDecl::class("Plain")
                        .with_modifier(Modifier::Public)
                        .with_member(inner()),
                )
                .with_item(TypeDecl::class("Open").public_partial().with_member(inner())),
        ),
    );

    let mut sink = MemorySink::new();
    let report = Generator::new(GeneratorConfig::strict())
        .run(&corpus, &mut sink)
        .unwrap();

    assert_eq!(companions(&sink), vec!["Open.Inner.g"]);
    assert_eq!(report.diagnostics.len(), 2);
    assert!(report.diagnostics.iter().all(|d| d.code == NOT_EXTENSIBLE));
}

#[test]
fn annotation_without_import_is_not_the_marker() {
    let mut corpus = Corpus::new();
    corpus.upsert(
        "Example.cs",
        CompilationUnit::new().with_item(
            NamespaceDecl::file_scoped("My.App")
                .with_item(TypeDecl::class("Example").public_partial().annotated("Object")),
        ),
    );
    assert!(companions(&run(&corpus)).is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn ineligible_objects_are_silent_by_default() {
    let corpus = single(TypeDecl::class("Example").annotated("Object"));
    let report = Generator::default()
        .run(&corpus, &mut MemorySink::new())
        .unwrap();
    assert!(report.diagnostics.is_empty());
}

#[test]
fn strict_mode_warns_about_ineligible_objects() {
    let corpus = single(TypeDecl::class("Example").annotated("Object"));
    let report = Generator::new(GeneratorConfig::strict())
        .run(&corpus, &mut MemorySink::new())
        .unwrap();

    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.code, NOT_EXTENSIBLE);
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(&*diagnostic.location.path, "Example.cs");
}

#[test]
fn strict_mode_ignores_unmarked_types() {
    let corpus = single(TypeDecl::class("Plain"));
    let report = Generator::new(GeneratorConfig::strict())
        .run(&corpus, &mut MemorySink::new())
        .unwrap();
    assert!(report.diagnostics.is_empty());
}
