//! Error types for the companion generator.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Ineligible declarations are never errors; these kinds only cover
//! conditions the host has to hear about.

use std::fmt;

use thiserror::Error;

/// The main error type for generator operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate output slot error.
    #[must_use]
    pub fn duplicate_file_key(
        file_key: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::DuplicateFileKey {
            file_key: file_key.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        })
    }

    /// Creates a document not found error.
    #[must_use]
    pub fn document_not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::DocumentNotFound(path.into()))
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error reports an abandoned run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two distinct entities derived the same output slot.
    #[error("duplicate output '{file_key}': {existing} and {incoming}")]
    DuplicateFileKey {
        /// The contested output slot.
        file_key: String,
        /// Qualified name of the entity that claimed the slot first.
        existing: String,
        /// Qualified name of the entity that collided with it.
        incoming: String,
    },

    /// No document is registered under the given path.
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// The host abandoned the run before it completed.
    #[error("generation cancelled")]
    Cancelled,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Document path.
    pub document: Option<String>,
    /// Line number in the document.
    pub line: Option<u32>,
    /// Column number in the document.
    pub column: Option<u32>,
    /// Pipeline stages the error passed through, innermost first.
    pub stages: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document path.
    #[must_use]
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Records a pipeline stage.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stages.push(stage.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(document) = &self.document {
            write!(f, "at {document}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        for stage in &self.stages {
            write!(f, "\n  in {stage}")?;
        }
        Ok(())
    }
}
