//! Axum router configuration for submission endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_submission, list_submissions, SubmissionAppState};

/// Create the submission API router.
///
/// # Routes
/// - `POST /submissions` - Store a submission (public)
/// - `GET /submissions` - List submissions (requires `x-admin-key`)
pub fn submission_routes() -> Router<SubmissionAppState> {
    Router::new().route(
        "/submissions",
        post(create_submission).get(list_submissions),
    )
}

/// Submission routes mounted both under `/api` and at the root.
pub fn submission_router() -> Router<SubmissionAppState> {
    Router::new()
        .nest("/api", submission_routes())
        .merge(submission_routes())
}
