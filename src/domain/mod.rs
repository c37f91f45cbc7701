//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `wheel` - Assessment wizard, snapshot, chart geometry and themes
//! - `submission` - Stored submissions and coach notifications

pub mod foundation;
pub mod submission;
pub mod wheel;
