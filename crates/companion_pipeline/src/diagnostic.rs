//! Opt-in diagnostics.
//!
//! By default the generator is silent about declarations it skips. With
//! [`GeneratorConfig::report_ineligible`](crate::GeneratorConfig) enabled,
//! a marked declaration that cannot be extended produces a warning instead
//! of vanishing without a trace.

use std::fmt;

use companion_foundation::Location;
use companion_syntax::DeclarationNode;

/// Code for a marked declaration that is not an extensible class.
pub const NOT_EXTENSIBLE: &str = "CMP001";

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Something the user most likely wants to fix.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A message about one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable diagnostic code.
    pub code: &'static str,
    /// Severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the declaration is.
    pub location: Location,
}

impl Diagnostic {
    /// A marked declaration that is not a `partial` class, or is nested in
    /// a type that is not one.
    #[must_use]
    pub fn not_extensible(node: &DeclarationNode) -> Self {
        Self {
            code: NOT_EXTENSIBLE,
            severity: Severity::Warning,
            message: format!(
                "'{}' is marked as an object but is not a partial class nested only in partial classes; no companion was generated",
                node.name
            ),
            location: node.location.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location, self.severity, self.code, self.message
        )
    }
}
