//! Unified error types for the budget service.
//!
//! Every fallible operation in the crate returns [`Result`]. Domain failures carry
//! a machine-readable [`ErrorKind`] so that callers (the HTTP adapter, tests) can
//! decide how to surface them without matching on message text.

use thiserror::Error;

/// Machine-readable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or semantically invalid input
    Validation,
    /// A well-formed reference that points at nothing
    NotFound,
    /// Anything unexpected
    Internal,
}

/// Errors raised by the budget store, configuration loading and server bootstrap.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation; `field` names the offending path (e.g. `envelopes[1]`)
    #[error("{message} at {field}")]
    Validation {
        /// Path of the field that failed
        field: String,
        /// Human-readable reason
        message: String,
    },

    /// No envelope exists at the requested position
    #[error("Envelope not found at index {index}")]
    EnvelopeNotFound {
        /// Requested position
        index: usize,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// I/O failure (socket bind, config file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable reason
        message: String,
    },
}

impl Error {
    /// Builds a [`Error::Validation`] for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Classifies the error for callers that map kinds to responses.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::EnvelopeNotFound { .. } => ErrorKind::NotFound,
            Self::Config { .. } | Self::Io(_) | Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
