//! Interactive form session.
//!
//! One [`CalculatorForm`] lives for the whole session. Input lines:
//!
//! - `<number1> <operation> <number2>`: submit
//! - `history`: fetch history
//! - `auto on|off`: toggle auto-refresh
//! - `state`: dump the form state as JSON
//! - `help`, `quit`

use crate::api::{CalculatorApi, Operation};
use crate::cli::output::{format_history_lines, format_outcome};
use crate::form::CalculatorForm;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
Commands:
  <a> <op> <b>    calculate, op is one of + - * / (or x, add, sub, mul, div)
  history         load history
  auto on|off     refresh history after each successful calculation
  state           show form state
  help            show this help
  quit            leave the session";

/// Parsed session input line.
#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Calculate {
        number1: String,
        operation: Operation,
        number2: String,
    },
    History,
    AutoRefresh(bool),
    State,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> Result<SessionCommand, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(SessionCommand::Empty),
        ["quit"] | ["exit"] => Ok(SessionCommand::Quit),
        ["help"] | ["?"] => Ok(SessionCommand::Help),
        ["history"] => Ok(SessionCommand::History),
        ["state"] => Ok(SessionCommand::State),
        ["auto", "on"] => Ok(SessionCommand::AutoRefresh(true)),
        ["auto", "off"] => Ok(SessionCommand::AutoRefresh(false)),
        [number1, operation, number2] => Ok(SessionCommand::Calculate {
            number1: number1.to_string(),
            operation: operation.parse()?,
            number2: number2.to_string(),
        }),
        _ => Err(format!("Unknown command: {} (type `help`)", line.trim())),
    }
}

/// Run the session until `quit` or end of input.
pub async fn run_session<A, R, W>(
    form: &CalculatorForm<A>,
    input: R,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>>
where
    A: CalculatorApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "lizzycalc session. Type `help` for commands.")?;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message.yellow())?;
                continue;
            }
        };

        match command {
            SessionCommand::Empty => {}
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&form.snapshot())?)?
            }
            SessionCommand::AutoRefresh(enabled) => {
                form.set_auto_refresh(enabled);
                writeln!(
                    out,
                    "Auto-refresh {}",
                    if enabled { "on" } else { "off" }
                )?;
            }
            SessionCommand::History => {
                form.fetch_history().await;
                writeln!(out, "{}", format_history_lines(&form.snapshot().history))?;
            }
            SessionCommand::Calculate {
                number1,
                operation,
                number2,
            } => {
                let submission = form.submit_with(number1, number2, operation).await;
                writeln!(out, "{}", format_outcome(&form.snapshot()))?;
                if let Some(refresh) = submission.history_refresh {
                    refresh.settled().await;
                    writeln!(out, "{}", format_history_lines(&form.snapshot().history))?;
                }
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
