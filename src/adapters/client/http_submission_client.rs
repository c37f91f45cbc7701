//! reqwest-backed client for `POST /api/submissions`.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::adapters::http::submission::{CreateSubmissionRequest, CreateSubmissionResponse, ErrorResponse};
use crate::domain::foundation::SubmissionId;
use crate::domain::submission::NewSubmission;
use crate::ports::{ClientError, SubmissionClient};

/// Sends submissions to a running submission server.
pub struct HttpSubmissionClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpSubmissionClient {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/submissions", self.base_url)
    }
}

/// Maps a non-success status and body to a client error.
fn classify_failure(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string());
    if status.is_server_error() {
        ClientError::Unavailable(message)
    } else {
        ClientError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn send(
        &self,
        submission: &NewSubmission,
        chart_png: Option<&[u8]>,
    ) -> Result<SubmissionId, ClientError> {
        let request = CreateSubmissionRequest::from_submission(submission, chart_png);

        let response = self
            .http_client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "submission not accepted");
            return Err(classify_failure(status, &body));
        }

        let created: CreateSubmissionResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        if !created.ok {
            return Err(ClientError::InvalidResponse(body));
        }
        Ok(SubmissionId::new(created.id))
    }
}
