//! Form state owned by [`CalculatorForm`](super::CalculatorForm).

use crate::api::{format_number, HistoryItem, Operation};
use serde::Serialize;

/// Everything the calculator form shows. Re-created for every session.
///
/// `result` and `error` are independent fields; a submit clears both before
/// it does anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    /// Raw operand text, not yet validated
    pub number1: String,
    pub number2: String,
    pub operation: Operation,
    pub result: Option<f64>,
    pub error: Option<String>,
    /// Last fetched history, replaced wholesale on every fetch
    pub history: Vec<HistoryItem>,
    /// A calculation request is in flight
    pub loading: bool,
    /// A history request is in flight
    pub history_loading: bool,
    pub auto_refresh: bool,
}

impl FormState {
    /// "= 5" when a result is shown.
    pub fn result_line(&self) -> Option<String> {
        self.result.map(|result| format!("= {}", format_number(result)))
    }

    /// One "a op b = r" line per history item, in backend order.
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// No request of either kind is in flight.
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.history_loading
    }
}
