//! Unified error types for the domain layer
//!
//! Player mistakes are never errors here; they are reported as validation
//! issues. `DomainError` covers malformed input and caller contract violations.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., out of range values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (unknown vocabulary ids)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Submission payload breaks the caller contract
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),
}

impl DomainError {
    /// Creates a validation error for out-of-range or malformed values.
    ///
    /// # Example
    /// ```ignore
    /// if value > 20 {
    ///     return Err(DomainError::validation("Level must be between 1 and 20"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used by every vocabulary `FromStr` implementation when the input does
    /// not match a known id.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid submission error
    pub fn invalid_submission(msg: impl Into<String>) -> Self {
        Self::InvalidSubmission(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSubmission(err.to_string())
    }
}
