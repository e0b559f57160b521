//! Choice engine errors.

use chargen_domain::DomainError;
use chargen_protocol::ErrorCode;

/// Errors returned by [`ChoiceService`](super::ChoiceService).
///
/// Player mistakes never land here; they are issues in a `ValidationResult`.
#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    #[error("Unknown {kind}: '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ChoiceError {
    /// Wire error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChoiceError::NotFound { .. } => ErrorCode::NotFound,
            ChoiceError::InvalidRequest(_) => ErrorCode::BadRequest,
            ChoiceError::Domain(err) => match err {
                DomainError::Parse(_) => ErrorCode::NotFound,
                DomainError::Validation(_)
                | DomainError::Constraint(_)
                | DomainError::InvalidSubmission(_) => ErrorCode::BadRequest,
            },
        }
    }
}
