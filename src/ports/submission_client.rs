//! Remote submission client port.
//!
//! Used by front ends to hand a completed assessment to the submission API.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::NewSubmission;

/// Port for sending a submission to the remote store.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Posts `submission`, optionally with a PNG of the chart.
    async fn send(
        &self,
        submission: &NewSubmission,
        chart_png: Option<&[u8]>,
    ) -> Result<SubmissionId, ClientError>;
}

/// Errors from the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server could not be reached or failed internally.
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),

    /// The server refused the payload.
    #[error("Submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The server answered with something unexpected.
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_client_is_object_safe() {
        fn _accepts_dyn(_client: &dyn SubmissionClient) {}
    }
}
