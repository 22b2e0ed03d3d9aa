//! The injection contract and the two static emissions.
//!
//! Every companion implements `IDagSetter`, whose single operation hands
//! the module runtime's client (`Query`) to the object. The attribute and
//! interface definitions are fixed text, emitted once per generator.

use companion_foundation::Artifact;
use companion_syntax::MetadataName;

/// Namespace of the marker attributes and the contract.
pub const MODULE_NAMESPACE: &str = "Dagger.SDK.Mod";

/// Namespace of the client type.
pub const CLIENT_NAMESPACE: &str = "Dagger.SDK";

/// Metadata name of the marker placed on eligible classes.
pub const OBJECT_ATTRIBUTE: &str = "Dagger.SDK.Mod.ObjectAttribute";

/// Metadata name of the marker placed on exposed methods.
pub const FUNCTION_ATTRIBUTE: &str = "Dagger.SDK.Mod.FunctionAttribute";

/// The contract interface.
pub const SETTER_INTERFACE: &str = "IDagSetter";

/// The contract's single operation.
pub const SETTER_METHOD: &str = "SetDag";

/// The external client handle type.
pub const CLIENT_TYPE: &str = "Query";

/// Private field holding the handle in every companion.
pub const CLIENT_FIELD: &str = "_dag";

/// Parameter name of the setter.
pub const CLIENT_PARAMETER: &str = "dag";

/// Output slot of the attribute definitions.
pub const ATTRIBUTES_FILE_KEY: &str = "Dagger.SDK.Mod_Attributes.g";

/// Output slot of the contract definition.
pub const INTERFACES_FILE_KEY: &str = "Dagger.SDK.Mod_Interfaces.g";

const ATTRIBUTES_SOURCE: &str = "\
using System;

namespace Dagger.SDK.Mod;

/// <summary>
/// Expose the class as a Dagger.ObjectTypeDef.
/// </summary>
[AttributeUsage(AttributeTargets.Class)]
public sealed class ObjectAttribute : Attribute;

/// <summary>
/// Expose the class as a Dagger.Function.
/// </summary>
[AttributeUsage(AttributeTargets.Method)]
public sealed class FunctionAttribute : Attribute;
";

const INTERFACES_SOURCE: &str = "\
namespace Dagger.SDK.Mod;

/// <summary>
/// An interface for module runtime to inject Dagger client instance to the
/// object class.
/// </summary>
public interface IDagSetter
{
    /// <summary>
    /// Set Dagger client instance.
    /// </summary>
    /// <param name=\"dag\">The Dagger client instance.</param>
    void SetDag(Query dag);
}
";

/// The marker that makes a class eligible.
#[must_use]
pub fn object_marker() -> MetadataName {
    MetadataName::parse(OBJECT_ATTRIBUTE)
}

/// The attribute definitions.
#[must_use]
pub fn attributes_source() -> Artifact {
    Artifact::new(ATTRIBUTES_FILE_KEY, ATTRIBUTES_SOURCE)
}

/// The contract definition.
#[must_use]
pub fn interfaces_source() -> Artifact {
    Artifact::new(INTERFACES_FILE_KEY, INTERFACES_SOURCE)
}

/// Both static emissions, in emission order.
#[must_use]
pub fn static_emissions() -> [Artifact; 2] {
    [attributes_source(), interfaces_source()]
}

/// Returns true if `file_key` belongs to a static emission.
#[must_use]
pub fn is_reserved(file_key: &str) -> bool {
    file_key == ATTRIBUTES_FILE_KEY || file_key == INTERFACES_FILE_KEY
}
