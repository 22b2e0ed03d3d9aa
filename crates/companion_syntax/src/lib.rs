//! Declaration trees, visitors, and the live document corpus.
//!
//! This crate models what the host front end hands to the generator. It
//! does not parse source text: the host owns parsing, and tests build trees
//! directly with the builder methods on [`ast`] types.
//!
//! # Modules
//!
//! - [`ast`] - Compilation units, namespaces, type declarations, members
//! - [`visitor`] - Scope-tracking traversal of declaration trees
//! - [`scope`] - The namespace, imports, and enclosing types of a declaration
//! - [`node`] - Flattened declaration snapshots consumed by the pipeline
//! - [`annotation`] - Annotation lookup by metadata name
//! - [`corpus`] - Documents with revision tracking

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod ast;
pub mod corpus;
pub mod node;
pub mod scope;
pub mod visitor;

pub use annotation::{MetadataName, has_annotation};
pub use ast::{
    Annotation, CompilationUnit, FieldDecl, Item, Member, MethodDecl, Modifier, NamespaceDecl,
    TypeDecl, TypeKind,
};
pub use corpus::{Change, Corpus, Document, DocumentId};
pub use node::{DeclarationNode, NodeId};
pub use scope::{EnclosingType, ScopeContext};
pub use visitor::{DeclarationVisitor, walk_type, walk_unit};
