//! reqwest implementation of [`CalculatorApi`].

use super::{
    ApiError, CalculationRequest, CalculationResponse, CalculatorApi, ErrorBody, HistoryItem,
    HistoryResponse,
};
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the calculation service.
pub struct HttpCalculatorApi {
    /// Base URL without trailing slash (e.g., "http://localhost:8080")
    base_url: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
    /// Per-request deadline; `None` waits indefinitely
    timeout: Option<Duration>,
}

impl HttpCalculatorApi {
    pub fn new(base_url: impl Into<String>, client: Arc<Client>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            timeout,
        }
    }

    /// Build a client from the `[client]` config section.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Arc::new(Client::new()),
            config.timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_timeout(&self, req: RequestBuilder) -> RequestBuilder {
        match self.timeout {
            Some(timeout) => req.timeout(timeout),
            None => req,
        }
    }

    fn send_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            let ms = self.timeout.map(|t| t.as_millis() as u64).unwrap_or_default();
            ApiError::Timeout(ms)
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl CalculatorApi for HttpCalculatorApi {
    async fn calculate(&self, request: CalculationRequest) -> Result<f64, ApiError> {
        let url = format!("{}/api/v1/calculate", self.base_url);
        tracing::debug!(
            url = %url,
            number1 = request.number1,
            number2 = request.number2,
            operation = %request.operation,
            "Submitting calculation"
        );

        let response = self
            .with_timeout(self.client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Empty message counts as absent
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty());
            tracing::warn!(status = status.as_u16(), ?message, "Calculation rejected");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body: CalculationResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse calculate response: {}", e))
        })?;

        if let Some(message) = body.message.as_deref().filter(|m| !m.is_empty()) {
            tracing::debug!(message, "Calculation returned a message");
        }

        Ok(body.result)
    }

    async fn history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        let url = format!("{}/api/v1/history", self.base_url);
        tracing::debug!(url = %url, "Fetching history");

        let response = self
            .with_timeout(self.client.get(&url))
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message: None,
            });
        }

        let body: HistoryResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse history response: {}", e))
        })?;

        Ok(body.items)
    }
}
