//! Submission repository port.
//!
//! Defines the contract for storing and listing submissions. Submissions are
//! append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::submission::{NewSubmission, Submission};

/// Repository port for submission persistence.
///
/// Implementations must:
/// - Assign a fresh, increasing `SubmissionId` on insert
/// - Preserve category/value order exactly
/// - List newest first, ties broken by descending id
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Stores a validated submission and returns the stored record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(
        &self,
        submission: NewSubmission,
        created_at: Timestamp,
    ) -> Result<Submission, DomainError>;

    /// Returns every stored submission, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Submission>, DomainError>;
}
