//! Admin API configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Key accepted when none is configured; refused in production.
pub const DEFAULT_ADMIN_KEY: &str = "dev-admin-key";

/// Admin listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Value expected in the `x-admin-key` header
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN__API_KEY"));
        }
        if *environment == Environment::Production && key == DEFAULT_ADMIN_KEY {
            return Err(ValidationError::DefaultAdminKey);
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
        }
    }
}

fn default_api_key() -> SecretString {
    SecretString::new(DEFAULT_ADMIN_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_allowed_in_development() {
        assert!(AdminConfig::default()
            .validate(&Environment::Development)
            .is_ok());
    }

    #[test]
    fn test_default_key_rejected_in_production() {
        assert_eq!(
            AdminConfig::default().validate(&Environment::Production),
            Err(ValidationError::DefaultAdminKey)
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = AdminConfig {
            api_key: SecretString::new("  ".to_string()),
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AdminConfig {
            api_key: SecretString::new("hunter2".to_string()),
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
