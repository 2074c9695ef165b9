//! Configuration module for lizzycalc
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`LIZZYCALC_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use lizzycalc::config::LizzyConfig;
//!
//! let toml = r#"
//! [client]
//! base_url = "http://calc.local:9000"
//! auto_refresh = true
//! "#;
//! let config: LizzyConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.client.base_url, "http://calc.local:9000");
//! assert!(config.client.auto_refresh);
//! ```

pub mod client;
pub mod error;
pub mod logging;

pub use client::ClientConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the calculator client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LizzyConfig {
    /// Calculation service settings
    pub client: ClientConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl LizzyConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored and the previous value is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("LIZZYCALC_URL") {
            self.client.base_url = url;
        }
        if let Ok(timeout) = std::env::var("LIZZYCALC_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.client.timeout_seconds = Some(t);
            }
        }
        if let Ok(auto) = std::env::var("LIZZYCALC_AUTO_REFRESH") {
            self.client.auto_refresh = auto.to_lowercase() == "true";
        }

        if let Ok(level) = std::env::var("LIZZYCALC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LIZZYCALC_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.client.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation {
                field: "client.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation {
                field: "client.base_url".to_string(),
                message: format!("'{}' must start with http:// or https://", url),
            });
        }

        if self.client.timeout_seconds == Some(0) {
            return Err(ConfigError::Validation {
                field: "client.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
