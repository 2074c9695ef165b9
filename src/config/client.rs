//! Calculation service client configuration

use serde::{Deserialize, Serialize};

/// Where the calculation service lives and how the form talks to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service base URL; endpoints live under `/api/v1`
    pub base_url: String,
    /// Per-request deadline in seconds. Unset means wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// Refresh history after every successful calculation
    pub auto_refresh: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: None,
            auto_refresh: false,
        }
    }
}
