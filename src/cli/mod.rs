//! CLI module for lizzycalc
//!
//! Command-line front end for the calculator form.
//!
//! # Commands
//!
//! - `calc` - Submit one calculation
//! - `history` - Show recorded calculations
//! - `session` - Interactive form session
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! lizzycalc calc 2 + 3
//! lizzycalc --url http://calc.local:8080 history --json
//! lizzycalc session
//! ```

pub mod calc;
pub mod completions;
pub mod config;
pub mod history;
pub mod output;
pub mod session;

pub use calc::handle_calc;
pub use completions::handle_completions;
pub use config::handle_config_init;
pub use history::handle_history;
pub use session::run_session;

use crate::api::Operation;
use crate::config::LizzyConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// lizzycalc - calculator client
#[derive(Parser, Debug)]
#[command(
    name = "lizzycalc",
    version,
    about = "Calculator client for the lizzyCalc service"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "lizzycalc.toml")]
    pub config: PathBuf,

    /// Calculation service base URL
    #[arg(short, long, global = true, env = "LIZZYCALC_URL")]
    pub url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "LIZZYCALC_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one calculation
    Calc(CalcArgs),
    /// Show recorded calculations
    History(HistoryArgs),
    /// Interactive form session
    Session(SessionArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub number1: String,

    /// Operation (+, -, *, /; also x, add, sub, mul, div)
    #[arg(allow_hyphen_values = true)]
    pub operation: Operation,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub number2: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fetch history after a successful calculation
    #[arg(short, long)]
    pub auto_refresh: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Start with auto-refresh enabled
    #[arg(short, long)]
    pub auto_refresh: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "lizzycalc.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load configuration with CLI overrides
///
/// A missing config file is not an error; defaults are used instead.
pub fn load_config_with_overrides(
    args: &GlobalArgs,
) -> Result<LizzyConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        LizzyConfig::load(Some(&args.config))?
    } else {
        LizzyConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref url) = args.url {
        config.client.base_url = url.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_calc() {
        let cli = Cli::try_parse_from(["lizzycalc", "calc", "2", "+", "3"]).unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.number1, "2");
                assert_eq!(args.operation, Operation::Add);
                assert_eq!(args.number2, "3");
                assert!(!args.json);
                assert!(!args.auto_refresh);
            }
            _ => panic!("Expected Calc command"),
        }
        assert_eq!(cli.global.config, PathBuf::from("lizzycalc.toml"));
    }

    #[test]
    fn test_cli_parse_calc_negative_operands() {
        let cli = Cli::try_parse_from(["lizzycalc", "calc", "-2.5", "-", "-3"]).unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.number1, "-2.5");
                assert_eq!(args.operation, Operation::Subtract);
                assert_eq!(args.number2, "-3");
            }
            _ => panic!("Expected Calc command"),
        }
    }

    #[test]
    fn test_cli_parse_calc_operation_alias() {
        let cli = Cli::try_parse_from(["lizzycalc", "calc", "4", "x", "5", "--json"]).unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.operation, Operation::Multiply);
                assert!(args.json);
            }
            _ => panic!("Expected Calc command"),
        }
    }

    #[test]
    fn test_cli_parse_calc_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["lizzycalc", "calc", "4", "%", "5"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_url_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lizzycalc",
            "history",
            "--url",
            "http://calc:9000",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.url.as_deref(), Some("http://calc:9000"));
        match cli.command {
            Commands::History(args) => assert!(args.json),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_cli_parse_session() {
        let cli = Cli::try_parse_from(["lizzycalc", "session", "-a"]).unwrap();
        match cli.command {
            Commands::Session(args) => assert!(args.auto_refresh),
            _ => panic!("Expected Session command"),
        }
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["lizzycalc", "config", "init", "-o", "x.toml"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init(args)) => {
                assert_eq!(args.output, PathBuf::from("x.toml"));
                assert!(!args.force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_load_config_from_file_with_url_override() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            temp.path(),
            "[client]\nbase_url = \"http://file:1\"\nauto_refresh = true\n",
        )
        .unwrap();

        let args = GlobalArgs {
            config: temp.path().to_path_buf(),
            url: Some("http://flag:2".to_string()),
            log_level: Some("debug".to_string()),
        };
        let config = load_config_with_overrides(&args).unwrap();

        assert_eq!(config.client.base_url, "http://flag:2");
        assert!(config.client.auto_refresh);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_config_rejects_invalid_url() {
        let args = GlobalArgs {
            config: PathBuf::from("/nonexistent/lizzycalc.toml"),
            url: Some("calc:8080".to_string()),
            log_level: None,
        };
        assert!(load_config_with_overrides(&args).is_err());
    }
}
