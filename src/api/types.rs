//! Wire types for the calculation service (`/api/v1/calculate`, `/api/v1/history`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operator sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Operation {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// Symbol used on the wire.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Glyph shown to people (−, ×).
    pub fn glyph(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "−" | "sub" | "minus" => Ok(Operation::Subtract),
            "*" | "×" | "x" | "mul" | "times" => Ok(Operation::Multiply),
            "/" | "÷" | "div" => Ok(Operation::Divide),
            _ => Err(format!("Invalid operation: {}", s)),
        }
    }
}

/// Body of `POST /api/v1/calculate`. Built fresh for every submit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub number1: f64,
    pub number2: f64,
    pub operation: Operation,
}

/// Successful calculate response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
    /// Informational text some backends attach to a result; not displayed.
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with a non-2xx status. `message` may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One past calculation recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: i64,
    pub number1: f64,
    pub number2: f64,
    pub operation: String,
    pub result: f64,
    /// Backend-reserved; preserved but never rendered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// ISO-8601 as sent by the backend, kept verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl HistoryItem {
    /// Timestamp parsed as RFC 3339, `None` when the backend sent something else.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Display for HistoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.number1),
            self.operation,
            format_number(self.number2),
            format_number(self.result)
        )
    }
}

/// Shortest exact rendering of a number, switching to exponent notation
/// below 1e-6 and from 1e21 up ("1e+21", "1.5e-7").
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

/// Body of `GET /api/v1/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<HistoryItem>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
