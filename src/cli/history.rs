//! History command implementation

use crate::api::CalculatorApi;
use crate::cli::output::{format_history_json, format_history_table};
use crate::cli::HistoryArgs;
use crate::form::CalculatorForm;

/// Handle `lizzycalc history`
///
/// A failed fetch shows as empty history, the same as in the form.
pub async fn handle_history<A: CalculatorApi>(
    args: &HistoryArgs,
    form: &CalculatorForm<A>,
) -> Result<String, Box<dyn std::error::Error>> {
    form.fetch_history().await;
    let state = form.snapshot();

    if args.json {
        Ok(format_history_json(&state.history)?)
    } else {
        Ok(format_history_table(&state.history))
    }
}
