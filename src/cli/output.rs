//! Output formatting helpers for CLI commands

use crate::api::{format_number, HistoryItem, Operation};
use crate::form::FormState;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;

/// Shown instead of an empty history table.
pub const EMPTY_HISTORY_HINT: &str =
    "No history yet. Run `history`, or turn on auto-refresh and calculate.";

/// JSON view of a successful submit cycle. Failures go to stderr instead.
#[derive(Debug, Clone, Serialize)]
pub struct CalcReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryItem>,
}

impl From<&FormState> for CalcReport {
    fn from(state: &FormState) -> Self {
        Self {
            result: state.result,
            history: state.history.clone(),
        }
    }
}

/// Result and error lines as the form shows them.
pub fn format_outcome(state: &FormState) -> String {
    let mut lines = Vec::new();
    if let Some(ref error) = state.error {
        lines.push(error.red().to_string());
    }
    if let Some(result) = state.result_line() {
        lines.push(result.green().bold().to_string());
    }
    lines.join("\n")
}

/// Format history as a table
pub fn format_history_table(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return EMPTY_HISTORY_HINT.dimmed().to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Expression", "Result", "Time"]);

    for item in items {
        let time = item
            .timestamp_utc()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| item.timestamp.clone());

        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(format!(
                "{} {} {}",
                format_number(item.number1),
                operation_glyph(&item.operation),
                format_number(item.number2)
            )),
            Cell::new(format_number(item.result)),
            Cell::new(time),
        ]);
    }

    table.to_string()
}

/// Display glyph for a recorded operation; unknown operations pass through.
fn operation_glyph(operation: &str) -> &str {
    operation
        .parse::<Operation>()
        .map(|op| op.glyph())
        .unwrap_or(operation)
}

/// Format history as JSON
pub fn format_history_json(items: &[HistoryItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "items": items }))
}

/// Plain "a op b = r" lines, one per item.
pub fn format_history_lines(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return EMPTY_HISTORY_HINT.dimmed().to_string();
    }
    items
        .iter()
        .map(|item| format!("  {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
