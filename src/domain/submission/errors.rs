//! Submission-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPayload | 400 |
//! | Unauthorized | 401 |
//! | Storage | 500 |
//! | Document | 500 |
//! | Delivery | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Submission-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Payload failed validation; nothing was written.
    InvalidPayload(ValidationError),

    /// Admin key missing or wrong.
    Unauthorized,

    /// Persistence failed.
    Storage(String),

    /// PDF rendering failed after the row was stored.
    Document(String),

    /// Email delivery failed after the row was stored.
    Delivery(String),
}

impl SubmissionError {
    pub fn storage(message: impl Into<String>) -> Self {
        SubmissionError::Storage(message.into())
    }

    pub fn document(message: impl Into<String>) -> Self {
        SubmissionError::Document(message.into())
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        SubmissionError::Delivery(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::InvalidPayload(_) => ErrorCode::ValidationFailed,
            SubmissionError::Unauthorized => ErrorCode::Unauthorized,
            SubmissionError::Storage(_) => ErrorCode::DatabaseError,
            SubmissionError::Document(_) | SubmissionError::Delivery(_) => {
                ErrorCode::ServiceUnavailable
            }
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SubmissionError::InvalidPayload(err) => format!("Invalid payload: {}", err),
            SubmissionError::Unauthorized => "Unauthorized".to_string(),
            SubmissionError::Storage(msg) => format!("Storage error: {}", msg),
            SubmissionError::Document(msg) => format!("Document rendering failed: {}", msg),
            SubmissionError::Delivery(msg) => format!("Email delivery failed: {}", msg),
        }
    }

    /// True when the failure happened after the row was committed.
    pub fn after_commit(&self) -> bool {
        matches!(
            self,
            SubmissionError::Document(_) | SubmissionError::Delivery(_)
        )
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubmissionError {}

impl From<ValidationError> for SubmissionError {
    fn from(err: ValidationError) -> Self {
        SubmissionError::InvalidPayload(err)
    }
}

impl From<DomainError> for SubmissionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SubmissionError::InvalidPayload(
                ValidationError::invalid_format("payload", err.message),
            ),
            ErrorCode::Unauthorized => SubmissionError::Unauthorized,
            _ => SubmissionError::Storage(err.message),
        }
    }
}

impl From<SubmissionError> for DomainError {
    fn from(err: SubmissionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
