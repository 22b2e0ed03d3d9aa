//! Declaration node snapshots.
//!
//! A [`DeclarationNode`] flattens one type declaration together with the
//! scope it was found in. This is the unit the eligibility filter and the
//! descriptor resolver work on; neither needs to look at the tree again.

use std::sync::Arc;

use companion_foundation::{Location, Span};

use crate::ast::{Annotation, CompilationUnit, Modifier, TypeDecl, TypeKind};
use crate::corpus::DocumentId;
use crate::scope::ScopeContext;
use crate::visitor::{DeclarationVisitor, walk_unit};

/// Position of a node within the corpus: its document and its ordinal in
/// a depth-first walk of that document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    /// Owning document.
    pub document: DocumentId,
    /// Walk order within the document.
    pub ordinal: u32,
}

/// A type declaration as seen by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct DeclarationNode {
    /// Position in the corpus
    pub id: NodeId,
    /// Declaration keyword
    pub kind: TypeKind,
    /// Simple name
    pub name: Arc<str>,
    /// Modifiers in written order
    pub modifiers: Vec<Modifier>,
    /// Attached annotations, as written
    pub annotations: Vec<Annotation>,
    /// Scope the declaration appears in
    pub scope: ScopeContext,
    /// Source location
    pub location: Location,
}

impl DeclarationNode {
    /// Builds a node from a declaration found in `scope`.
    #[must_use]
    pub fn from_decl(id: NodeId, path: &Arc<str>, decl: &TypeDecl, scope: &ScopeContext) -> Self {
        Self {
            id,
            kind: decl.kind,
            name: decl.name.clone(),
            modifiers: decl.modifiers.clone(),
            annotations: decl.annotations.clone(),
            scope: scope.clone(),
            location: Location::new(path.clone(), decl.span),
        }
    }

    /// Snapshots every type declaration of a compilation unit, in source order.
    #[must_use]
    pub fn collect(document: DocumentId, path: &Arc<str>, unit: &CompilationUnit) -> Vec<Self> {
        let mut collector = NodeCollector {
            document,
            path,
            nodes: Vec::new(),
        };
        walk_unit(&mut collector, unit);
        collector.nodes
    }

    /// Returns true if the declaration carries the given modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Returns true if a second, generated declaration can merge into this
    /// one: a class declared `partial`, nested only in `partial` classes.
    #[must_use]
    pub fn is_extensible(&self) -> bool {
        self.kind == TypeKind::Class
            && self.has_modifier(Modifier::Partial)
            && self.scope.containers_open()
    }

    /// Source span of the declaration.
    #[must_use]
    pub fn span(&self) -> Span {
        self.location.span
    }
}

struct NodeCollector<'a> {
    document: DocumentId,
    path: &'a Arc<str>,
    nodes: Vec<DeclarationNode>,
}

impl DeclarationVisitor for NodeCollector<'_> {
    fn visit_type(&mut self, decl: &TypeDecl, scope: &ScopeContext) {
        let id = NodeId {
            document: self.document,
            ordinal: u32::try_from(self.nodes.len()).unwrap_or(u32::MAX),
        };
        self.nodes
            .push(DeclarationNode::from_decl(id, self.path, decl, scope));
    }
}
