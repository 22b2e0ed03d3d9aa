//! Companion - Incremental partial-class companion generator
//!
//! This crate re-exports all layers of the generator for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: companion_pipeline   - Filter, resolver, synthesizer, caches, driver
//! Layer 1: companion_syntax     - Declaration trees, visitor, corpus
//! Layer 0: companion_foundation - Core types (Descriptor, Artifact, Error)
//! ```

pub use companion_foundation as foundation;
pub use companion_pipeline as pipeline;
pub use companion_syntax as syntax;
