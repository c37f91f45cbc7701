//! Submission domain module.
//!
//! Stored assessment results and the coach notification built from them.

mod aggregate;
mod client;
mod errors;
mod notice;

pub use aggregate::{NewSubmission, Submission};
pub use client::ClientDetails;
pub use errors::SubmissionError;
pub use notice::{notice_body, NOTICE_SUBJECT, REPORT_FILENAME};
