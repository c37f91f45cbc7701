//! Client adapters for talking to a remote submission API.

mod http_submission_client;

pub use http_submission_client::HttpSubmissionClient;
