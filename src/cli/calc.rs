//! Calc command implementation

use crate::api::CalculatorApi;
use crate::cli::output::{format_history_lines, format_outcome, CalcReport};
use crate::cli::CalcArgs;
use crate::form::{CalculatorForm, SubmitOutcome};

/// Handle `lizzycalc calc`
///
/// Runs one submit cycle. Validation, backend and transport failures come
/// back as `Err` carrying the message the form shows.
pub async fn handle_calc<A: CalculatorApi>(
    args: &CalcArgs,
    form: &CalculatorForm<A>,
) -> Result<String, Box<dyn std::error::Error>> {
    if args.auto_refresh {
        form.set_auto_refresh(true);
    }

    let submission = form
        .submit_with(args.number1.clone(), args.number2.clone(), args.operation)
        .await;

    // A one-shot command waits for the refresh it started
    if let Some(refresh) = submission.history_refresh {
        refresh.settled().await;
    }

    let state = form.snapshot();
    if !matches!(submission.outcome, SubmitOutcome::Calculated(_)) {
        return Err(state.error.clone().unwrap_or_default().into());
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&CalcReport::from(&state))?);
    }

    let mut output = format_outcome(&state);
    if state.auto_refresh {
        output.push_str("\n\n");
        output.push_str(&format_history_lines(&state.history));
    }
    Ok(output)
}
