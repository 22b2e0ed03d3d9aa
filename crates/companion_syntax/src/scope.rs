//! Lexical scope seen by a declaration.

use std::sync::Arc;

use companion_foundation::ScopePath;

use crate::ast::{Modifier, TypeDecl, TypeKind};

/// A type that encloses a nested declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnclosingType {
    /// Simple name.
    pub name: Arc<str>,
    /// Declaration keyword.
    pub kind: TypeKind,
    /// Whether the type is declared `partial`.
    pub partial: bool,
}

impl EnclosingType {
    /// Creates an enclosing type entry.
    #[must_use]
    pub fn new(name: &str, kind: TypeKind, partial: bool) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            partial,
        }
    }

    /// Describes `decl` as the container of its members.
    #[must_use]
    pub fn of(decl: &TypeDecl) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind,
            partial: decl.has_modifier(Modifier::Partial),
        }
    }

    /// Returns true if another `partial class` part may reopen this type.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.kind == TypeKind::Class && self.partial
    }
}

/// Where a declaration sits: its namespace, the `using` directives in
/// effect, and the types it is nested in.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScopeContext {
    /// Fully qualified enclosing namespace.
    pub namespace: ScopePath,
    /// Imported namespaces, outermost directive first.
    pub imports: Vec<ScopePath>,
    /// Enclosing types, outermost first.
    pub containing_types: Vec<EnclosingType>,
}

impl ScopeContext {
    /// Scope of a top-level declaration with no imports.
    #[must_use]
    pub fn global() -> Self {
        Self::default()
    }

    /// Scope of a top-level declaration in the given namespace.
    #[must_use]
    pub fn in_namespace(namespace: &str) -> Self {
        Self {
            namespace: ScopePath::parse(namespace),
            ..Self::default()
        }
    }

    /// Adds an imported namespace.
    #[must_use]
    pub fn with_import(mut self, namespace: &str) -> Self {
        self.imports.push(ScopePath::parse(namespace));
        self
    }

    /// Adds an enclosing type.
    #[must_use]
    pub fn within_type(mut self, outer: EnclosingType) -> Self {
        self.containing_types.push(outer);
        self
    }

    /// Names of the enclosing types, outermost first.
    pub fn type_names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.containing_types.iter().map(|t| &t.name)
    }

    /// Returns true if every enclosing type is a `partial class`.
    /// Vacuously true at namespace level.
    #[must_use]
    pub fn containers_open(&self) -> bool {
        self.containing_types.iter().all(EnclosingType::is_open)
    }

    /// Returns true if `namespace` is imported by a `using` directive.
    #[must_use]
    pub fn imports(&self, namespace: &ScopePath) -> bool {
        self.imports.contains(namespace)
    }

    /// Returns true if names declared in `namespace` are visible without
    /// qualification: it encloses this scope or is imported.
    #[must_use]
    pub fn sees(&self, namespace: &ScopePath) -> bool {
        self.namespace.starts_with(namespace) || self.imports(namespace)
    }
}
