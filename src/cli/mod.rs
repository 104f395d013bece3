//! Command-line interface layer.

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;

pub use args::{Arguments, Command, CommonArgs, NewCommand, OutputFormat, ParseCommand, ScanCommand};
pub use exit_status::ExitStatus;

/// Main entry point for the formlens CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Parse(cmd)) => commands::parse::parse(cmd),
        Some(Command::Scan(cmd)) => commands::scan::scan(cmd),
        Some(Command::New(cmd)) => commands::new_file::new_file(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
