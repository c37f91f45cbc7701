//! Document renderer port - score report generation.
//!
//! Turns a set of scores plus an optional chart image into a single-page PDF.
//! Adapters (like `PandocPdfRenderer`) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{Score, Timestamp};
use crate::domain::submission::{NewSubmission, Submission};
use crate::domain::wheel::WheelSnapshot;

/// Chart image supplied with a report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartAttachment {
    /// No chart was provided.
    #[default]
    Missing,
    /// Encoded image bytes (PNG or JPEG).
    Image(Vec<u8>),
    /// A chart was provided but could not be decoded.
    Unreadable,
}

impl ChartAttachment {
    pub fn from_png(png: Option<Vec<u8>>) -> Self {
        match png {
            Some(bytes) => ChartAttachment::Image(bytes),
            None => ChartAttachment::Missing,
        }
    }
}

/// Everything that goes into a score report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub client_name: Option<String>,
    pub generated_at: Timestamp,
    pub categories: Vec<String>,
    pub values: Vec<Score>,
    pub chart: ChartAttachment,
}

impl ScoreReport {
    pub fn from_snapshot(
        snapshot: &WheelSnapshot,
        client_name: Option<String>,
        chart: ChartAttachment,
    ) -> Self {
        Self {
            client_name,
            generated_at: Timestamp::now(),
            categories: snapshot.labels().to_vec(),
            values: snapshot.scores().to_vec(),
            chart,
        }
    }

    pub fn from_new_submission(submission: &NewSubmission, chart: ChartAttachment) -> Self {
        Self {
            client_name: submission.client().name().map(str::to_string),
            generated_at: Timestamp::now(),
            categories: submission.categories().to_vec(),
            values: submission.values().to_vec(),
            chart,
        }
    }

    pub fn from_submission(submission: &Submission, chart: ChartAttachment) -> Self {
        Self {
            client_name: submission.client_name.clone(),
            generated_at: submission.created_at,
            categories: submission.categories.clone(),
            values: submission.values.clone(),
            chart,
        }
    }

    /// `(label, score)` pairs in category order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Score)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Port for rendering score reports to PDF.
///
/// # Contract
///
/// Implementations must:
/// - Produce a complete PDF document
/// - Fall back to a text notice when the chart cannot be embedded
/// - Report a missing converter as `ServiceUnavailable`
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Renders `report` to PDF bytes.
    async fn render_pdf(&self, report: &ScoreReport) -> Result<Vec<u8>, ExportError>;

    /// Check if the renderer's external dependencies are present.
    async fn is_available(&self) -> bool;
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// External converter (e.g., Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Conversion to PDF failed.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Timeout during conversion.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// I/O error during conversion.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a service unavailable error.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    /// Create a PDF conversion error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}
