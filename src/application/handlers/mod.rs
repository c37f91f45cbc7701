//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod submission;

pub use submission::{
    CoachNotifier, CreateSubmissionCommand, CreateSubmissionHandler, CreateSubmissionResult,
    ListSubmissionsHandler, ListSubmissionsQuery,
};
