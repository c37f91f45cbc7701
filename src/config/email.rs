//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
///
/// Delivery is active only when both the API key and the coach address are
/// set.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Option<SecretString>,

    /// Resend API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Recipient of submission notices
    pub coach_email: Option<String>,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// API key and coach address, when delivery is fully configured.
    pub fn delivery(&self) -> Option<(&SecretString, &str)> {
        let key = self
            .resend_api_key
            .as_ref()
            .filter(|k| !k.expose_secret().trim().is_empty())?;
        let coach = self
            .coach_email
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())?;
        Some((key, coach))
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.resend_api_key {
            let key = key.expose_secret();
            if !key.is_empty() && !key.starts_with("re_") {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidEmail("from_email"));
        }
        if let Some(coach) = self.coach_email.as_deref().filter(|c| !c.trim().is_empty()) {
            if !coach.contains('@') {
                return Err(ValidationError::InvalidEmail("coach_email"));
            }
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            api_url: default_api_url(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            coach_email: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_email() -> String {
    "noreply@wheeloflife.app".to_string()
}

fn default_from_name() -> String {
    "Wheel of Life".to_string()
}
