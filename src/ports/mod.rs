//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionRepository` - Submission persistence
//! - `ChartRenderer` / `ChartSlot` - Radar chart drawing and instance lifecycle
//! - `DocumentRenderer` - PDF score reports
//! - `EmailSender` - Coach notification delivery
//! - `SubmissionClient` - Remote submission API

mod chart_renderer;
mod document_renderer;
mod email_sender;
mod submission_client;
mod submission_repository;

pub use chart_renderer::{ChartError, ChartInstance, ChartRenderer, ChartSlot};
pub use document_renderer::{ChartAttachment, DocumentRenderer, ExportError, ScoreReport};
pub use email_sender::{Attachment, EmailError, EmailSender, OutgoingEmail};
pub use submission_client::{ClientError, SubmissionClient};
pub use submission_repository::SubmissionRepository;
