//! Report rendering configuration

use serde::Deserialize;

use super::error::ValidationError;

/// PDF rendering configuration (pandoc)
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Path to the pandoc binary; resolved from `PATH` when unset
    pub pandoc_path: Option<String>,

    /// Upper bound on a single PDF conversion
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
}

impl DocumentConfig {
    /// Validate document configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        Ok(())
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
        }
    }
}

fn default_pdf_timeout() -> u64 {
    30
}
