//! Calculation service client.
//!
//! [`CalculatorApi`] is the seam between the form controller and the
//! network. [`HttpCalculatorApi`] speaks the service's REST contract:
//!
//! - `POST /api/v1/calculate` with `{number1, number2, operation}`
//! - `GET /api/v1/history` returning `{items: [...]}`

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod types;

pub use client::HttpCalculatorApi;
pub use error::ApiError;
pub use types::{
    format_number, CalculationRequest, CalculationResponse, ErrorBody, HistoryItem,
    HistoryResponse, Operation,
};

/// Request/response operations offered by the calculation service.
///
/// Implementations must be usable from spawned tasks, so the form controller
/// can refresh history independently of a calculation.
#[async_trait]
pub trait CalculatorApi: Send + Sync + 'static {
    /// Submit one calculation.
    ///
    /// # Returns
    ///
    /// - `Ok(result)` on a 2xx response
    /// - `Err(ApiError::Backend)` on a non-2xx response, carrying its `message`
    /// - `Err(ApiError::Network | ApiError::Timeout)` if the request never completed
    /// - `Err(ApiError::InvalidResponse)` if a 2xx body has no numeric `result`
    async fn calculate(&self, request: CalculationRequest) -> Result<f64, ApiError>;

    /// Fetch recorded calculations in the order the backend returns them.
    async fn history(&self) -> Result<Vec<HistoryItem>, ApiError>;
}
