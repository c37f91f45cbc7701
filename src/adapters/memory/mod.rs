//! In-memory adapters for tests and development.

mod submission_repository;

pub use submission_repository::InMemorySubmissionRepository;
