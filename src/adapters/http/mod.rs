//! HTTP adapters - REST API implementations.

pub mod router;
pub mod submission;

pub use router::{build_router, RouterOptions};
pub use submission::{SubmissionAppState, SubmissionApiError};
