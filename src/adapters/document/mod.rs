//! Document adapters - score report generation.
//!
//! - `ReportTemplate` - Pandoc markdown for the score report
//! - `PandocPdfRenderer` - PDF conversion via Pandoc

mod pandoc_pdf_renderer;
mod report_template;

pub use pandoc_pdf_renderer::PandocPdfRenderer;
pub use report_template::{ChartPlacement, ReportTemplate, CHART_FALLBACK, REPORT_TITLE};
