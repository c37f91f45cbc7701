//! Submission command and query handlers.

mod create_submission;
mod list_submissions;

pub use create_submission::{
    CoachNotifier, CreateSubmissionCommand, CreateSubmissionHandler, CreateSubmissionResult,
};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
