//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `WHEEL_OF_LIFE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use wheel_of_life::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod admin;
mod database;
mod document;
mod email;
mod error;
mod server;

pub use admin::{AdminConfig, DEFAULT_ADMIN_KEY};
pub use database::DatabaseConfig;
pub use document::DocumentConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_BODY_LIMIT_BYTES};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working development defaults, so an empty environment
/// loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS, body limit)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Admin listing key
    #[serde(default)]
    pub admin: AdminConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// PDF rendering configuration (pandoc)
    #[serde(default)]
    pub document: DocumentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WHEEL_OF_LIFE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WHEEL_OF_LIFE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WHEEL_OF_LIFE__ADMIN__API_KEY=...` -> `admin.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WHEEL_OF_LIFE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.admin.validate(&self.server.environment)?;
        self.email.validate()?;
        self.document.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
