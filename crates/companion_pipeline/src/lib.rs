//! Incremental generation of partial-class companions.
//!
//! For every class that carries the object marker and is declared
//! `partial`, this crate emits a second partial declaration of the same
//! class implementing the client injection contract. Two static sources
//! (the marker attributes and the contract interface) are emitted once.
//!
//! # Architecture
//!
//! ```text
//!  Corpus (documents with revisions)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DOCUMENT MEMO   │  → skip documents whose revision did not move
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ELIGIBILITY     │  → marked + partial class, else skipped
//! │ FILTER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SYMBOL          │  → Descriptor { scope: My.App, name: Example }
//! │ RESOLVER        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARTIFACT CACHE  │  → reuse, or synthesize "Example.g"
//! │ + SYNTHESIZER   │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EMISSION SINK   │  → add changed slots, remove vanished ones
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Formatting and reporting options
//! - [`contract`] - Names and static sources of the injection contract
//! - [`filter`] - Which declarations take part
//! - [`resolve`] - Declaration node to descriptor
//! - [`synthesize`] - Descriptor to companion source
//! - [`cache`] - Per-document and per-descriptor memoization
//! - [`sink`] - The host output seam
//! - [`diagnostic`] - Opt-in warnings for skipped declarations
//! - [`driver`] - The [`Generator`] tying it all together
//!
//! # Example
//!
//! ```
//! use companion_pipeline::{Generator, GeneratorConfig, MemorySink};
//! use companion_syntax::{CompilationUnit, Corpus, NamespaceDecl, TypeDecl};
//!
//! let mut corpus = Corpus::new();
//! corpus.upsert(
//!     "Example.cs",
//!     CompilationUnit::new().with_using("Dagger.SDK.Mod").with_item(
//!         NamespaceDecl::file_scoped("My.App")
//!             .with_item(TypeDecl::class("Example").public_partial().annotated("Object")),
//!     ),
//! );
//!
//! let mut generator = Generator::new(GeneratorConfig::default());
//! let mut sink = MemorySink::new();
//! generator.run(&corpus, &mut sink).unwrap();
//!
//! assert!(sink.source("Example.g").unwrap().contains("partial class Example : IDagSetter"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod config;
pub mod contract;
pub mod diagnostic;
pub mod driver;
pub mod filter;
pub mod resolve;
pub mod sink;
pub mod synthesize;

pub use cache::ArtifactCache;
pub use config::{GeneratorConfig, LineEnding};
pub use diagnostic::{Diagnostic, NOT_EXTENSIBLE, Severity};
pub use driver::{CancellationFlag, Generator, RunReport, RunStats};
pub use filter::{Eligibility, EligibilityFilter};
pub use resolve::{ScopeResolver, SymbolResolver};
pub use sink::{EmissionSink, MemorySink};
pub use synthesize::{AUTO_GENERATED_HEADER, CompanionSynthesizer};
