//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `handlers` serves the submission API; `assessment` drives a single
//! interactive assessment on the client side.

pub mod assessment;
pub mod handlers;

pub use assessment::{AssessmentController, AssessmentError, Submitted};
pub use handlers::{
    CoachNotifier, CreateSubmissionCommand, CreateSubmissionHandler, CreateSubmissionResult,
    ListSubmissionsHandler, ListSubmissionsQuery,
};
