//! Declaration trees handed over by the host front end.
//!
//! Only the shape the generator cares about is modeled: namespaces,
//! `using` directives, type declarations with their modifiers and
//! annotations, and enough of their members to walk nested types.
//! Everything derives `PartialEq` so the corpus can tell a real edit from
//! a re-parse that produced the same tree.

use std::fmt;
use std::sync::Arc;

use companion_foundation::{ScopePath, Span};

// =============================================================================
// Compilation Unit
// =============================================================================

/// One parsed document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CompilationUnit {
    /// `using` directives at the top of the document.
    pub usings: Vec<ScopePath>,
    /// Top-level items.
    pub items: Vec<Item>,
}

impl CompilationUnit {
    /// Creates an empty compilation unit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `using` directive.
    #[must_use]
    pub fn with_using(mut self, namespace: &str) -> Self {
        self.usings.push(ScopePath::parse(namespace));
        self
    }

    /// Adds a top-level item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// A top-level or namespace-level item.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A namespace block or file-scoped namespace.
    Namespace(NamespaceDecl),
    /// A type declaration.
    Type(TypeDecl),
}

impl From<NamespaceDecl> for Item {
    fn from(decl: NamespaceDecl) -> Self {
        Self::Namespace(decl)
    }
}

impl From<TypeDecl> for Item {
    fn from(decl: TypeDecl) -> Self {
        Self::Type(decl)
    }
}

// =============================================================================
// Namespace Declaration
// =============================================================================

/// A namespace declaration.
///
/// Block (`namespace A { }`) and file-scoped (`namespace A;`) forms scope
/// their items identically; the flag only records which form was written.
#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceDecl {
    /// Namespace path, relative to the enclosing namespace.
    pub name: ScopePath,
    /// Whether this is a file-scoped namespace.
    pub file_scoped: bool,
    /// `using` directives inside the namespace.
    pub usings: Vec<ScopePath>,
    /// Items declared inside the namespace.
    pub items: Vec<Item>,
    /// Source span
    pub span: Span,
}

impl NamespaceDecl {
    /// Creates a block namespace.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: ScopePath::parse(name),
            file_scoped: false,
            usings: Vec::new(),
            items: Vec::new(),
            span: Span::default(),
        }
    }

    /// Creates a file-scoped namespace.
    #[must_use]
    pub fn file_scoped(name: &str) -> Self {
        Self {
            file_scoped: true,
            ..Self::new(name)
        }
    }

    /// Adds a `using` directive.
    #[must_use]
    pub fn with_using(mut self, namespace: &str) -> Self {
        self.usings.push(ScopePath::parse(namespace));
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Sets the source span.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

// =============================================================================
// Type Declaration
// =============================================================================

/// The declaration keyword of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `interface`
    Interface,
    /// `record`
    Record,
    /// `enum`
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Record => "record",
            Self::Enum => "enum",
        })
    }
}

/// A declaration modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `public`
    Public,
    /// `internal`
    Internal,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `sealed`
    Sealed,
    /// `partial`
    Partial,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::Partial => "partial",
        })
    }
}

/// An annotation as written in source (`[Object]`).
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Name as written, possibly qualified or `global::`-prefixed.
    pub name: Arc<str>,
    /// Source span
    pub span: Span,
}

impl Annotation {
    /// Creates an annotation.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            span: Span::default(),
        }
    }
}

/// A type declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDecl {
    /// Simple name
    pub name: Arc<str>,
    /// Declaration keyword
    pub kind: TypeKind,
    /// Modifiers in written order
    pub modifiers: Vec<Modifier>,
    /// Attached annotations
    pub annotations: Vec<Annotation>,
    /// Members, including nested types
    pub members: Vec<Member>,
    /// Source span
    pub span: Span,
}

impl TypeDecl {
    /// Creates a type declaration with no modifiers.
    #[must_use]
    pub fn new(kind: TypeKind, name: &str) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            members: Vec::new(),
            span: Span::default(),
        }
    }

    /// Creates a class declaration.
    #[must_use]
    pub fn class(name: &str) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Creates a struct declaration.
    #[must_use]
    pub fn structure(name: &str) -> Self {
        Self::new(TypeKind::Struct, name)
    }

    /// Adds a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Shorthand for `public partial`.
    #[must_use]
    pub fn public_partial(self) -> Self {
        self.with_modifier(Modifier::Public)
            .with_modifier(Modifier::Partial)
    }

    /// Attaches an annotation.
    #[must_use]
    pub fn annotated(mut self, name: &str) -> Self {
        self.annotations.push(Annotation::new(name));
        self
    }

    /// Adds a member.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Sets the source span.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns true if the declaration carries the given modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

// =============================================================================
// Members
// =============================================================================

/// A member of a type declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    /// A nested type.
    Type(TypeDecl),
    /// A method.
    Method(MethodDecl),
    /// A field.
    Field(FieldDecl),
}

impl From<TypeDecl> for Member {
    fn from(decl: TypeDecl) -> Self {
        Self::Type(decl)
    }
}

impl From<MethodDecl> for Member {
    fn from(decl: MethodDecl) -> Self {
        Self::Method(decl)
    }
}

impl From<FieldDecl> for Member {
    fn from(decl: FieldDecl) -> Self {
        Self::Field(decl)
    }
}

/// A method declaration. Bodies are not modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodDecl {
    /// Method name
    pub name: Arc<str>,
    /// Modifiers in written order
    pub modifiers: Vec<Modifier>,
    /// Attached annotations
    pub annotations: Vec<Annotation>,
    /// Source span
    pub span: Span,
}

impl MethodDecl {
    /// Creates a method declaration.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            span: Span::default(),
        }
    }

    /// Adds a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Attaches an annotation.
    #[must_use]
    pub fn annotated(mut self, name: &str) -> Self {
        self.annotations.push(Annotation::new(name));
        self
    }
}

/// A field declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDecl {
    /// Field name
    pub name: Arc<str>,
    /// Field type as written
    pub ty: Arc<str>,
    /// Source span
    pub span: Span,
}

impl FieldDecl {
    /// Creates a field declaration.
    #[must_use]
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: Arc::from(name),
            ty: Arc::from(ty),
            span: Span::default(),
        }
    }
}
