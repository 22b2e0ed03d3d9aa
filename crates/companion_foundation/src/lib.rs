//! Core value types shared by every layer of the companion generator.
//!
//! This crate provides:
//! - [`ScopePath`] - Dotted namespace paths (`My.App`)
//! - [`Descriptor`] - The stable identity of a declaration, used as the cache key
//! - [`Artifact`] - Generated source text plus the output slot it targets
//! - [`Span`] and [`Location`] - Source positions for diagnostics
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifact;
pub mod descriptor;
pub mod error;
pub mod span;

pub use artifact::{Artifact, GENERATED_SUFFIX, SOURCE_EXTENSION};
pub use descriptor::{Descriptor, ScopePath};
pub use error::{Error, ErrorContext, ErrorKind};
pub use span::{Location, Span};

/// Result type used throughout the companion generator.
pub type Result<T> = std::result::Result<T, Error>;
