//! ListSubmissionsHandler - Query handler for the admin listing.

use std::sync::Arc;

use crate::domain::submission::{Submission, SubmissionError};
use crate::ports::SubmissionRepository;

/// Query for every stored submission.
#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsQuery;

/// Handler for listing submissions newest first.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListSubmissionsQuery) -> Result<Vec<Submission>, SubmissionError> {
        self.repository
            .list_newest_first()
            .await
            .map_err(|e| SubmissionError::storage(e.message))
    }
}
