//! HTTP DTOs (Data Transfer Objects) for submission endpoints.
//!
//! Field names are camelCase on the wire.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::CreateSubmissionCommand;
use crate::domain::foundation::ValidationError;
use crate::domain::submission::{ClientDetails, NewSubmission, Submission};
use crate::ports::ChartAttachment;

const DATA_URL_PREFIXES: [&str; 2] = ["data:image/png;base64,", "data:image/jpeg;base64,"];

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to store a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub values: Option<Vec<i64>>,
    /// Base64 chart image, optionally as a data URL.
    #[serde(default, alias = "chartBase64", skip_serializing_if = "Option::is_none")]
    pub chart_image: Option<String>,
}

impl CreateSubmissionRequest {
    /// Builds a request from a validated submission and optional PNG.
    pub fn from_submission(submission: &NewSubmission, chart_png: Option<&[u8]>) -> Self {
        Self {
            client_email: submission.client().email().map(str::to_string),
            client_name: submission.client().name().map(str::to_string),
            categories: Some(submission.categories().to_vec()),
            values: Some(submission.values().iter().map(|s| i64::from(s.value())).collect()),
            chart_image: chart_png.map(|png| STANDARD.encode(png)),
        }
    }

    /// Validates the payload into a command.
    pub fn into_command(self) -> Result<CreateSubmissionCommand, ValidationError> {
        let categories = self
            .categories
            .ok_or_else(|| ValidationError::empty_field("categories"))?;
        let values = self
            .values
            .ok_or_else(|| ValidationError::empty_field("values"))?;
        let client = ClientDetails::new(self.client_email, self.client_name);
        let submission = NewSubmission::new(client, categories, &values)?;
        Ok(CreateSubmissionCommand {
            submission,
            chart: decode_chart(self.chart_image.as_deref()),
        })
    }
}

/// Decodes a base64 chart, stripping a PNG/JPEG data-URL prefix.
pub fn decode_chart(encoded: Option<&str>) -> ChartAttachment {
    let Some(raw) = encoded.map(str::trim).filter(|s| !s.is_empty()) else {
        return ChartAttachment::Missing;
    };
    let data = DATA_URL_PREFIXES
        .iter()
        .find_map(|prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw);
    match STANDARD.decode(data) {
        Ok(bytes) if !bytes.is_empty() => ChartAttachment::Image(bytes),
        _ => ChartAttachment::Unreadable,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a stored submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmissionResponse {
    pub ok: bool,
    pub id: i64,
}

/// One row of the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: i64,
    pub created_at: String,
    pub client_email: Option<String>,
    pub client_name: Option<String>,
    pub categories: Vec<String>,
    pub values: Vec<u8>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id.value(),
            created_at: s.created_at.to_rfc3339(),
            values: s.raw_values(),
            client_email: s.client_email,
            client_name: s.client_name,
            categories: s.categories,
        }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
