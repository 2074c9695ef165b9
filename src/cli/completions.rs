//! Completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::generate;
use std::io::Write;

/// Handle `lizzycalc completions`, writing the script to `out`.
pub fn handle_completions<W: Write>(args: &CompletionsArgs, out: &mut W) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, out);
}
