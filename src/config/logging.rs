//! `[logging]` section: where the client's tracing output goes and how loud it is.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Shape of the lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines interleaved with the CLI's own output
    #[default]
    Pretty,
    /// One JSON object per event, for piping into a collector
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    /// Case-insensitive; used for `LIZZYCALC_LOG_FORMAT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(format!("Invalid log format: {}", s))
        }
    }
}

/// Tracing settings for the `lizzycalc` binary.
///
/// The default level is `warn`: a one-shot `calc` should print only its
/// result unless something goes wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base filter for every module (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
    /// Per-module overrides keyed by module under `lizzycalc::`,
    /// e.g. `api = "debug"` to see each request the client sends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}
