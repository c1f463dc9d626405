//! Error types for SeqVec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SeqVecError
pub type Result<T> = std::result::Result<T, SeqVecError>;

/// Unified error type for SeqVec operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqVecError {
    // -------------------------------------------------------------------------
    // Container Errors
    // -------------------------------------------------------------------------
    /// A position, range, or index fell outside the live window of the vector,
    /// or the vector was empty when an element was required.
    #[error("The method '{method}' cannot access {detail}")]
    OutOfRange {
        method: &'static str,
        detail: String,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Harness Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SeqVecError {
    pub(crate) fn out_of_range(method: &'static str, detail: impl Into<String>) -> Self {
        SeqVecError::OutOfRange {
            method,
            detail: detail.into(),
        }
    }

    /// True for the container's out-of-range failure kind
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SeqVecError::OutOfRange { .. })
    }
}
