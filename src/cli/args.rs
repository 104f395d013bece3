//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all formlens
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `parse`: Extract the control model from one Designer file
//! - `scan`: Find and summarize every Designer file under a directory
//! - `new`: Write a fresh minimal Designer file for a new form

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the inspection commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output (per-control properties and events)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable control hierarchy
    Text,
    /// The full model as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Path to a *.Designer.cs file
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory to scan for Designer files
    pub dir: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct NewCommand {
    /// Where to write the new Designer file (stdout when omitted)
    pub path: Option<PathBuf>,

    /// Form class name
    #[arg(long, default_value = "Form1")]
    pub name: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the control model from a Designer file
    Parse(ParseCommand),
    /// Find and summarize every Designer file under a directory
    Scan(ScanCommand),
    /// Write a fresh minimal Designer file for a new form
    New(NewCommand),
}
