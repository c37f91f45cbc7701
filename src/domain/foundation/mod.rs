//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Wheel of Life domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SubmissionId;
pub use score::Score;
pub use timestamp::Timestamp;
