//! Resend email adapter.
//!
//! Posts JSON to `{base_url}/emails` with a bearer key; attachments are sent
//! base64-encoded.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{EmailError, EmailSender, OutgoingEmail};

/// Resend API configuration.
#[derive(Clone)]
pub struct ResendConfig {
    /// Resend API key (re_...).
    api_key: SecretString,

    /// Base URL for the Resend API (default: https://api.resend.com).
    api_base_url: String,

    /// Value of the `from` field, e.g. `Wheel of Life <noreply@example.com>`.
    from: String,
}

impl ResendConfig {
    pub fn new(api_key: SecretString, from: impl Into<String>) -> Self {
        Self {
            api_key,
            api_base_url: "https://api.resend.com".to_string(),
            from: from.into(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct AttachmentPayload<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
}

/// Email sender backed by Resend.
pub struct ResendEmailSender {
    config: ResendConfig,
    http_client: reqwest::Client,
}

impl ResendEmailSender {
    pub fn new(config: ResendConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn payload<'a>(&'a self, email: &'a OutgoingEmail) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from,
            to: vec![email.to.as_str()],
            subject: &email.subject,
            text: &email.text,
            attachments: email
                .attachments
                .iter()
                .map(|a| AttachmentPayload {
                    filename: &a.filename,
                    content: STANDARD.encode(&a.content),
                    content_type: &a.content_type,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let url = format!("{}/emails", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.payload(email))
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %error_text, "Resend send failed");
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::debug!(to = %email.to, "email sent");
        Ok(())
    }
}
