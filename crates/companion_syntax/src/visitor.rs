//! Visitor pattern for traversing declaration trees.
//!
//! The walker tracks the [`ScopeContext`] as it descends, so visitors see
//! every declaration together with its namespace, imports, and enclosing
//! types without re-deriving them.
//!
//! # Example
//!
//! ```
//! use companion_syntax::ast::{CompilationUnit, NamespaceDecl, TypeDecl};
//! use companion_syntax::scope::ScopeContext;
//! use companion_syntax::visitor::{DeclarationVisitor, walk_unit};
//!
//! struct TypeCounter(usize);
//!
//! impl DeclarationVisitor for TypeCounter {
//!     fn visit_type(&mut self, _decl: &TypeDecl, _scope: &ScopeContext) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let unit = CompilationUnit::new().with_item(
//!     NamespaceDecl::new("My.App")
//!         .with_item(TypeDecl::class("A").with_member(TypeDecl::class("B"))),
//! );
//! let mut counter = TypeCounter(0);
//! walk_unit(&mut counter, &unit);
//! assert_eq!(counter.0, 2);
//! ```

use crate::ast::{CompilationUnit, FieldDecl, Item, Member, MethodDecl, NamespaceDecl, TypeDecl};
use crate::scope::{EnclosingType, ScopeContext};

/// Trait for read-only declaration visitors.
///
/// Implement the `visit_*` methods for the declarations of interest. The
/// default implementations do nothing.
#[allow(unused_variables)]
pub trait DeclarationVisitor {
    /// Called when entering a namespace. `scope` already includes it.
    fn enter_namespace(&mut self, decl: &NamespaceDecl, scope: &ScopeContext) {}

    /// Called after all items of a namespace were visited.
    fn leave_namespace(&mut self, decl: &NamespaceDecl, scope: &ScopeContext) {}

    /// Visit a type declaration. `scope` is the scope it is declared in.
    fn visit_type(&mut self, decl: &TypeDecl, scope: &ScopeContext) {}

    /// Called after all members of a type were visited.
    fn leave_type(&mut self, decl: &TypeDecl, scope: &ScopeContext) {}

    /// Visit a method. `scope` lists the declaring type last.
    fn visit_method(&mut self, decl: &MethodDecl, scope: &ScopeContext) {}

    /// Visit a field. `scope` lists the declaring type last.
    fn visit_field(&mut self, decl: &FieldDecl, scope: &ScopeContext) {}
}

/// Walk a compilation unit depth-first in source order.
pub fn walk_unit<V: DeclarationVisitor>(visitor: &mut V, unit: &CompilationUnit) {
    let mut scope = ScopeContext::global();
    scope.imports.extend(unit.usings.iter().cloned());
    walk_items(visitor, &unit.items, &mut scope);
}

fn walk_items<V: DeclarationVisitor>(visitor: &mut V, items: &[Item], scope: &mut ScopeContext) {
    for item in items {
        match item {
            Item::Namespace(decl) => walk_namespace(visitor, decl, scope),
            Item::Type(decl) => walk_type(visitor, decl, scope),
        }
    }
}

fn walk_namespace<V: DeclarationVisitor>(
    visitor: &mut V,
    decl: &NamespaceDecl,
    scope: &mut ScopeContext,
) {
    let outer = scope.namespace.clone();
    let imports = scope.imports.len();

    scope.namespace = outer.join(&decl.name);
    scope.imports.extend(decl.usings.iter().cloned());

    visitor.enter_namespace(decl, scope);
    walk_items(visitor, &decl.items, scope);
    visitor.leave_namespace(decl, scope);

    scope.imports.truncate(imports);
    scope.namespace = outer;
}

/// Walk a type declaration and its members.
///
/// Exposed for hosts that hand over individual declarations rather than
/// whole documents.
pub fn walk_type<V: DeclarationVisitor>(visitor: &mut V, decl: &TypeDecl, scope: &mut ScopeContext) {
    visitor.visit_type(decl, scope);

    scope.containing_types.push(EnclosingType::of(decl));
    for member in &decl.members {
        match member {
            Member::Type(nested) => walk_type(visitor, nested, scope),
            Member::Method(method) => visitor.visit_method(method, scope),
            Member::Field(field) => visitor.visit_field(field, scope),
        }
    }
    scope.containing_types.pop();

    visitor.leave_type(decl, scope);
}
