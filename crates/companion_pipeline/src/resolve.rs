//! Descriptor resolution.
//!
//! Maps an eligible node to its [`Descriptor`]. Resolution must be a pure
//! function of the node: the incremental cache trusts that an unchanged
//! node resolves to an equal descriptor.

use companion_foundation::Descriptor;
use companion_syntax::DeclarationNode;

/// Resolves declaration nodes to descriptors.
///
/// Hosts with their own symbol tables implement this; closures of type
/// `Fn(&DeclarationNode) -> Descriptor` implement it too.
pub trait SymbolResolver {
    /// Resolves an eligible node.
    fn resolve(&self, node: &DeclarationNode) -> Descriptor;
}

impl<F> SymbolResolver for F
where
    F: Fn(&DeclarationNode) -> Descriptor,
{
    fn resolve(&self, node: &DeclarationNode) -> Descriptor {
        self(node)
    }
}

/// Resolves from the lexical scope recorded on the node.
///
/// A declaration outside any namespace resolves to the global scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopeResolver;

impl SymbolResolver for ScopeResolver {
    fn resolve(&self, node: &DeclarationNode) -> Descriptor {
        Descriptor::new(node.scope.namespace.clone(), node.name.clone())
            .nested_in(node.scope.type_names().cloned())
    }
}
