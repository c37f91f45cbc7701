//! HTTP adapter for submission endpoints.
//!
//! - `POST /api/submissions` - Store a submission, render and email the report
//! - `GET /api/submissions` - Admin listing, newest first
//!
//! Both are also served without the `/api` prefix.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{
    create_submission, health, list_submissions, AdminKey, SubmissionApiError,
    SubmissionAppState, ADMIN_KEY_HEADER,
};
pub use routes::{submission_router, submission_routes};
