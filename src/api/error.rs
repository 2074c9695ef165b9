//! Error types for calculation service calls.

use thiserror::Error;

/// Errors that can occur while talking to the calculation service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (DNS, connection refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Service answered with a non-2xx status.
    #[error("Backend error {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Backend {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose body is not what the contract promises.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// True when the service could not be used at all.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Backend { .. })
    }
}
