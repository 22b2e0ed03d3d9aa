//! Companion synthesis.
//!
//! Renders, for one descriptor, the partial declaration that merges into
//! the user's class and implements the injection contract:
//!
//! ```text
//! using Dagger.SDK;
//! using Dagger.SDK.Mod;
//!
//! namespace My.App;
//!
//! partial class Example : IDagSetter
//! {
//!     private Query _dag;
//!
//!     public void SetDag(Query dag)
//!     {
//!         _dag = dag;
//!     }
//! }
//! ```
//!
//! The companion leaves accessibility unspecified so it merges with
//! whatever the user's own part declares.

use companion_foundation::{Artifact, Descriptor};

use crate::config::GeneratorConfig;
use crate::contract::{
    CLIENT_FIELD, CLIENT_NAMESPACE, CLIENT_PARAMETER, CLIENT_TYPE, MODULE_NAMESPACE,
    SETTER_INTERFACE, SETTER_METHOD,
};

/// Header emitted when `auto_generated_header` is enabled.
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated/>";

/// Renders companions. Holds formatting settings only.
#[derive(Clone, Debug)]
pub struct CompanionSynthesizer {
    indent: String,
    newline: &'static str,
    header: bool,
}

impl Default for CompanionSynthesizer {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl CompanionSynthesizer {
    /// Creates a synthesizer with the formatting of `config`.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            indent: config.indent(),
            newline: config.line_ending.as_str(),
            header: config.auto_generated_header,
        }
    }

    /// Produces the companion artifact for `descriptor`.
    #[must_use]
    pub fn synthesize(&self, descriptor: &Descriptor) -> Artifact {
        Artifact::new(descriptor.file_key(), self.render(descriptor))
    }

    /// Renders the companion source text.
    #[must_use]
    pub fn render(&self, descriptor: &Descriptor) -> String {
        let mut w = SourceWriter::new(&self.indent, self.newline);

        if self.header {
            w.line(AUTO_GENERATED_HEADER);
            w.blank();
        }

        w.line(&format!("using {CLIENT_NAMESPACE};"));
        w.line(&format!("using {MODULE_NAMESPACE};"));
        w.blank();

        if !descriptor.scope.is_global() {
            w.line(&format!("namespace {};", descriptor.scope));
            w.blank();
        }

        for outer in &descriptor.containing_types {
            w.open(&format!("partial class {outer}"));
        }

        w.open(&format!(
            "partial class {} : {SETTER_INTERFACE}",
            descriptor.name
        ));
        w.line(&format!("private {CLIENT_TYPE} {CLIENT_FIELD};"));
        w.blank();
        w.open(&format!(
            "public void {SETTER_METHOD}({CLIENT_TYPE} {CLIENT_PARAMETER})"
        ));
        w.line(&format!("{CLIENT_FIELD} = {CLIENT_PARAMETER};"));
        w.close();
        w.close();

        for _ in &descriptor.containing_types {
            w.close();
        }

        w.finish()
    }
}

/// Line-oriented writer with brace-block indentation.
struct SourceWriter<'a> {
    output: String,
    depth: usize,
    indent: &'a str,
    newline: &'a str,
}

impl<'a> SourceWriter<'a> {
    fn new(indent: &'a str, newline: &'a str) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            indent,
            newline,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(self.indent);
        }
        self.output.push_str(text);
        self.output.push_str(self.newline);
    }

    // Blank lines carry no indentation.
    fn blank(&mut self) {
        self.output.push_str(self.newline);
    }

    fn open(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.output
    }
}
