//! Configuration for the generator.

/// Line terminator used in generated sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Configuration for the generator.
///
/// Controls how companions are formatted and whether ineligible
/// declarations are reported. A generator keeps its configuration for its
/// whole lifetime; changing formatting means starting a new generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of spaces per indentation level.
    pub indent_width: usize,

    /// Line terminator for generated companions.
    pub line_ending: LineEnding,

    /// Prefix generated companions with `// <auto-generated/>`.
    pub auto_generated_header: bool,

    /// Report marked declarations that cannot be extended.
    pub report_ineligible: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_ending: LineEnding::Lf,
            auto_generated_header: false,
            report_ineligible: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration that reports ineligible declarations.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            report_ineligible: true,
            ..Self::default()
        }
    }

    /// Builder method to set the indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Builder method to set the line ending.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Builder method to enable/disable the auto-generated header.
    #[must_use]
    pub fn with_auto_generated_header(mut self, enabled: bool) -> Self {
        self.auto_generated_header = enabled;
        self
    }

    /// Builder method to enable/disable ineligibility diagnostics.
    #[must_use]
    pub fn with_report_ineligible(mut self, enabled: bool) -> Self {
        self.report_ineligible = enabled;
        self
    }

    /// One indentation level as text.
    #[must_use]
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
