//! Pandoc-based PDF renderer adapter.
//!
//! Writes the chart into a scratch directory, builds the report markdown and
//! converts it with Pandoc (xelatex engine). Pandoc must be installed; if it
//! is not, rendering returns `ServiceUnavailable`.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use image::ImageFormat;
use tokio::process::Command;

use super::report_template::{ChartPlacement, ReportTemplate};
use crate::ports::{ChartAttachment, DocumentRenderer, ExportError, ScoreReport};

const PDF_FILE: &str = "report.pdf";

/// PDF renderer that shells out to Pandoc.
#[derive(Debug, Clone)]
pub struct PandocPdfRenderer {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,

    /// Timeout for PDF conversion in seconds.
    pdf_timeout_secs: u64,

    template: ReportTemplate,
}

impl Default for PandocPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PandocPdfRenderer {
    /// Create a new renderer with default settings.
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: 30,
            template: ReportTemplate::new(),
        }
    }

    /// Set a custom pandoc path.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Set the timeout for PDF conversion.
    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Check if Pandoc is installed and accessible.
    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }

    /// Builds the markdown for `report`, writing any chart into `dir`.
    async fn prepare(&self, report: &ScoreReport, dir: &Path) -> Result<String, ExportError> {
        let placement = match &report.chart {
            ChartAttachment::Missing => ChartPlacement::Omitted,
            ChartAttachment::Unreadable => ChartPlacement::Failed,
            ChartAttachment::Image(bytes) => match chart_file_name(bytes) {
                Some(name) => {
                    tokio::fs::write(dir.join(name), bytes)
                        .await
                        .map_err(|e| ExportError::io_error(format!("Failed to write chart: {}", e)))?;
                    ChartPlacement::Embedded(name)
                }
                None => {
                    tracing::warn!("chart image could not be decoded; rendering without it");
                    ChartPlacement::Failed
                }
            },
        };
        Ok(self.template.render(report, placement))
    }
}

/// File name for a decodable PNG or JPEG, `None` otherwise.
fn chart_file_name(bytes: &[u8]) -> Option<&'static str> {
    let format = image::guess_format(bytes).ok()?;
    let name = match format {
        ImageFormat::Png => "chart.png",
        ImageFormat::Jpeg => "chart.jpg",
        _ => return None,
    };
    image::load_from_memory_with_format(bytes, format).ok()?;
    Some(name)
}

#[async_trait]
impl DocumentRenderer for PandocPdfRenderer {
    async fn render_pdf(&self, report: &ScoreReport) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let dir = tempfile::tempdir()
            .map_err(|e| ExportError::io_error(format!("Failed to create scratch dir: {}", e)))?;
        let markdown = self.prepare(report, dir.path()).await?;

        let mut child = Command::new(self.pandoc_command())
            .current_dir(dir.path())
            .args([
                "-f",
                "markdown",
                "-o",
                PDF_FILE,
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=0.5in",
                "-V",
                "fontsize=11pt",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        tokio::fs::read(dir.path().join(PDF_FILE))
            .await
            .map_err(|e| ExportError::pdf_failed(format!("Pandoc produced no PDF: {}", e)))
    }

    async fn is_available(&self) -> bool {
        self.check_pandoc().await
    }
}
