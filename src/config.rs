//! Environment-driven settings.
//!
//! | Variable             | Default                     |
//! |----------------------|-----------------------------|
//! | `MONGODB_URL`        | `mongodb://localhost:27017` |
//! | `MONGODB_DB`         | `taskflow`                  |
//! | `MONGODB_TIMEOUT_MS` | driver default              |
//! | `CORS_ORIGINS`       | `http://localhost:4200`     |
//! | `BIND_ADDRESS`       | `0.0.0.0:8000`              |

use crate::task::adapters::mongo::{DEFAULT_DATABASE, DEFAULT_URL, StoreSettings};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Origin allowed when `CORS_ORIGINS` is unset.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

/// Address the HTTP server binds when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration source could not be read or deserialised.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// `BIND_ADDRESS` is not a socket address.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        /// Configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Process settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Document store connection string.
    #[serde(default = "default_mongodb_url")]
    pub mongodb_url: String,
    /// Database holding the task collection.
    #[serde(default = "default_mongodb_db")]
    pub mongodb_db: String,
    /// Store server selection timeout in milliseconds.
    #[serde(default)]
    pub mongodb_timeout_ms: Option<u64>,
    /// Comma-separated list of allowed cross-origin request sources.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
    /// Socket address for the HTTP server.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mongodb_url: default_mongodb_url(),
            mongodb_db: default_mongodb_db(),
            mongodb_timeout_ms: None,
            cors_origins: default_cors_origins(),
            bind_address: default_bind_address(),
        }
    }
}

impl Settings {
    /// Loads settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a variable cannot be
    /// deserialised into its field.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_environment(config::Environment::default())
    }

    /// Loads settings from an explicit environment source.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a variable cannot be
    /// deserialised into its field.
    pub fn from_environment(environment: config::Environment) -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(environment)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Returns the subset needed by the storage gateway.
    #[must_use]
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            url: self.mongodb_url.clone(),
            database: self.mongodb_db.clone(),
            server_selection_timeout: self.mongodb_timeout_ms.map(Duration::from_millis),
        }
    }

    /// Returns the allowed origins with blanks removed.
    #[must_use]
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Parses the HTTP bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddress`] when the value is not a
    /// socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_address
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddress {
                value: self.bind_address.clone(),
                source,
            })
    }
}

fn default_mongodb_url() -> String {
    DEFAULT_URL.to_owned()
}

fn default_mongodb_db() -> String {
    DEFAULT_DATABASE.to_owned()
}

fn default_cors_origins() -> String {
    DEFAULT_CORS_ORIGIN.to_owned()
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_owned()
}
