//! Config command handlers

use crate::cli::ConfigInitArgs;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../lizzycalc.example.toml");

/// Handle `lizzycalc config init`
///
/// Returns the confirmation message to print.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;
    tracing::debug!(path = %args.output.display(), "Wrote example config");

    Ok(format!(
        "✓ Configuration file created: {}\n  Set [client].base_url to your calculation service.",
        args.output.display()
    ))
}
