//! HTTP handlers for submission endpoints.
//!
//! These handlers connect Axum routes to the submission command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Json, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::application::handlers::submission::{
    CoachNotifier, CreateSubmissionHandler, ListSubmissionsHandler, ListSubmissionsQuery,
};
use crate::domain::foundation::ValidationError;
use crate::domain::submission::SubmissionError;
use crate::ports::{DocumentRenderer, SubmissionRepository};

use super::dto::{
    CreateSubmissionRequest, CreateSubmissionResponse, ErrorResponse, SubmissionResponse,
};

/// Header carrying the admin key for the listing endpoint.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for submission endpoints, cloned per request.
#[derive(Clone)]
pub struct SubmissionAppState {
    pub repository: Arc<dyn SubmissionRepository>,
    pub documents: Arc<dyn DocumentRenderer>,
    /// `None` when email delivery is not configured.
    pub notifier: Option<CoachNotifier>,
    pub admin_key: SecretString,
}

impl SubmissionAppState {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        documents: Arc<dyn DocumentRenderer>,
        notifier: Option<CoachNotifier>,
        admin_key: SecretString,
    ) -> Self {
        Self {
            repository,
            documents,
            notifier,
            admin_key,
        }
    }

    pub fn create_submission_handler(&self) -> CreateSubmissionHandler {
        CreateSubmissionHandler::new(
            self.repository.clone(),
            self.documents.clone(),
            self.notifier.clone(),
        )
    }

    pub fn list_submissions_handler(&self) -> ListSubmissionsHandler {
        ListSubmissionsHandler::new(self.repository.clone())
    }

    /// Constant-time check of a presented key against the configured one.
    pub fn admin_key_matches(&self, presented: &str) -> bool {
        let expected = self.admin_key.expose_secret().as_bytes();
        !expected.is_empty() && bool::from(presented.as_bytes().ct_eq(expected))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Admin Key Extraction
// ════════════════════════════════════════════════════════════════════════════════

/// Proof that the request carried the configured admin key.
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

/// Rejection for a missing or wrong admin key.
pub struct AdminKeyRejected;

impl IntoResponse for AdminKeyRejected {
    fn into_response(self) -> axum::response::Response {
        SubmissionApiError(SubmissionError::Unauthorized).into_response()
    }
}

#[async_trait::async_trait]
impl FromRequestParts<SubmissionAppState> for AdminKey {
    type Rejection = AdminKeyRejected;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SubmissionAppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AdminKeyRejected)?;

        if state.admin_key_matches(presented) {
            Ok(AdminKey)
        } else {
            tracing::warn!("rejected admin request with wrong key");
            Err(AdminKeyRejected)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/submissions - Store a submission and notify the coach
pub async fn create_submission(
    State(state): State<SubmissionAppState>,
    payload: Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SubmissionApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unparseable submission body");
        SubmissionError::InvalidPayload(ValidationError::invalid_format(
            "body",
            rejection.body_text(),
        ))
    })?;

    let cmd = request.into_command()?;
    let result = state.create_submission_handler().handle(cmd).await?;

    Ok(Json(CreateSubmissionResponse {
        ok: true,
        id: result.submission.id.value(),
    }))
}

/// GET /api/submissions - List all submissions, newest first (admin only)
pub async fn list_submissions(
    State(state): State<SubmissionAppState>,
    _admin: AdminKey,
) -> Result<impl IntoResponse, SubmissionApiError> {
    let submissions = state
        .list_submissions_handler()
        .handle(ListSubmissionsQuery)
        .await?;

    let response: Vec<SubmissionResponse> =
        submissions.into_iter().map(SubmissionResponse::from).collect();
    Ok(Json(response))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts submission errors to HTTP responses.
///
/// Server-side failures are logged here and answered with a generic body.
#[derive(Debug)]
pub struct SubmissionApiError(SubmissionError);

impl From<SubmissionError> for SubmissionApiError {
    fn from(err: SubmissionError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for SubmissionApiError {
    fn from(err: ValidationError) -> Self {
        Self(SubmissionError::InvalidPayload(err))
    }
}

impl IntoResponse for SubmissionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            SubmissionError::InvalidPayload(err) => {
                tracing::debug!(error = %err, "rejected submission payload");
                (StatusCode::BAD_REQUEST, "Invalid payload")
            }
            SubmissionError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            SubmissionError::Storage(_)
            | SubmissionError::Document(_)
            | SubmissionError::Delivery(_) => {
                tracing::error!(
                    code = %self.0.code(),
                    after_commit = self.0.after_commit(),
                    error = %self.0,
                    "submission request failed"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
