//! Custom error types for finreport
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finreport operations
#[derive(Error, Debug)]
pub enum FinReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Local input validation; nothing was sent to the backend
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status or could not be reached
    #[error("{message}")]
    Fetch {
        /// User-facing message
        message: String,
        /// Underlying cause, kept for logs
        cause: String,
    },

    /// No user identity could be resolved for a report request
    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    /// Session file errors
    #[error("Session error: {0}")]
    Session(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinReportError {
    /// Create a fetch error with the given user-facing message
    pub fn fetch(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

impl From<std::io::Error> for FinReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finreport operations
pub type FinReportResult<T> = Result<T, FinReportError>;
