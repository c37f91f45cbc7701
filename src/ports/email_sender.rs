//! Email sender port.
//!
//! Outbound transactional email. The submission flow uses it to deliver the
//! PDF report to the coach.

use async_trait::async_trait;
use thiserror::Error;

/// File attached to an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn pdf(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf".to_string(),
            content,
        }
    }
}

/// A plain-text email ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

/// Port for sending email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends `email`.
    ///
    /// # Errors
    ///
    /// - `Transport` if the provider could not be reached
    /// - `Rejected` if the provider refused the message
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// Errors from email delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email provider unreachable: {0}")]
    Transport(String),

    #[error("Email rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}
