//! In-Memory Submission Repository Adapter
//!
//! Keeps submissions in a vector. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SubmissionId, Timestamp};
use crate::domain::submission::{NewSubmission, Submission};
use crate::ports::SubmissionRepository;

/// In-memory storage for submissions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionRepository {
    rows: Arc<RwLock<Vec<Submission>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored submissions
    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(
        &self,
        submission: NewSubmission,
        created_at: Timestamp,
    ) -> Result<Submission, DomainError> {
        let mut rows = self.rows.write().await;
        let id = SubmissionId::new(rows.len() as i64 + 1);
        let stored = submission.into_submission(id, created_at);
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, DomainError> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::ClientDetails;

    fn new_submission(value: i64) -> NewSubmission {
        NewSubmission::new(ClientDetails::anonymous(), vec!["A".into()], &[value]).unwrap()
    }

    #[tokio::test]
    async fn ids_increase_and_list_is_newest_first() {
        let repo = InMemorySubmissionRepository::new();
        let ts = Timestamp::now();
        let a = repo.insert(new_submission(1), ts).await.unwrap();
        let b = repo.insert(new_submission(2), ts).await.unwrap();
        assert!(b.id > a.id);

        let listed = repo.list_newest_first().await.unwrap();
        assert_eq!(listed[0].id, b.id);
        assert_eq!(repo.count().await, 2);
        assert_eq!(listed[1].raw_values(), vec![1]);
    }
}
