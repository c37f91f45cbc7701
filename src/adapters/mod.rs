//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` / `memory` - Submission storage
//! - `chart` - Radar chart rendering (PNG, SVG)
//! - `document` - PDF reports via pandoc
//! - `email` - Coach notifications via Resend
//! - `http` - REST API (axum)
//! - `client` - Remote submission client (reqwest)

pub mod chart;
pub mod client;
pub mod document;
pub mod email;
pub mod http;
pub mod memory;
pub mod sqlite;

pub use chart::{PngRadarRenderer, SvgRadarRenderer};
pub use client::HttpSubmissionClient;
pub use document::PandocPdfRenderer;
pub use email::{ResendConfig, ResendEmailSender};
pub use memory::InMemorySubmissionRepository;
pub use sqlite::SqliteSubmissionRepository;
