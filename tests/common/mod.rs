//! Shared test utilities for lizzycalc integration tests.

#![allow(dead_code)]

use lizzycalc::api::{HistoryItem, HttpCalculatorApi};
use lizzycalc::form::CalculatorForm;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CALCULATE_PATH: &str = "/api/v1/calculate";
pub const HISTORY_PATH: &str = "/api/v1/history";

/// Client pointed at a mock server, no timeout.
pub fn api_for(server: &MockServer) -> HttpCalculatorApi {
    HttpCalculatorApi::new(server.uri(), Arc::new(reqwest::Client::new()), None)
}

/// Client pointed at a mock server with a short deadline.
pub fn api_with_timeout(server: &MockServer, timeout: Duration) -> HttpCalculatorApi {
    HttpCalculatorApi::new(
        server.uri(),
        Arc::new(reqwest::Client::new()),
        Some(timeout),
    )
}

/// Client pointed at a local port nothing listens on.
pub fn unreachable_api() -> HttpCalculatorApi {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    HttpCalculatorApi::new(
        format!("http://127.0.0.1:{}", port),
        Arc::new(reqwest::Client::new()),
        None,
    )
}

/// Fresh form session against a mock server.
pub fn form_for(server: &MockServer) -> CalculatorForm<HttpCalculatorApi> {
    CalculatorForm::new(api_for(server))
}

/// History item as the service serializes it.
pub fn history_json(id: i64, number1: f64, operation: &str, number2: f64, result: f64) -> Value {
    json!({
        "id": id,
        "number1": number1,
        "number2": number2,
        "operation": operation,
        "result": result,
        "message": "",
        "timestamp": "2024-01-01T00:00:00Z"
    })
}

pub fn history_item(id: i64, number1: f64, operation: &str, number2: f64, result: f64) -> HistoryItem {
    serde_json::from_value(history_json(id, number1, operation, number2, result)).unwrap()
}

pub async fn mount_calculate(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(CALCULATE_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

pub async fn mount_history(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(HISTORY_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Requests the mock server saw on `path`.
pub async fn request_count(server: &MockServer, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == path)
        .count()
}
