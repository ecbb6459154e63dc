// scrublog/src/cli.rs
//! This file defines the command-line interface (CLI) for the scrublog
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrublog",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Display and sanitize log content safely",
    long_about = "Scrublog is a command-line utility for working with operational log data. It redacts sensitive values from structured payloads before they reach a log line, and retrieves the trailing portion of on-disk log files for display even when the files contain encoding-invalid bytes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'scrublog' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `scrublog` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints a safe, displayable tail of a log file.
    #[command(about = "Prints a safe, displayable tail of a log file.")]
    Tail(TailCommand),

    /// Sanitizes a structured JSON payload, redacting sensitive values.
    #[command(about = "Sanitizes a structured JSON payload, redacting sensitive values.")]
    Sanitize(SanitizeCommand),
}

/// Arguments for the `tail` command.
#[derive(Parser, Debug)]
pub struct TailCommand {
    /// Path to the log file to display.
    #[arg(value_name = "PATH", help = "Path to the log file to display.")]
    pub path: PathBuf,

    /// Maximum number of trailing lines to display.
    #[arg(long, short = 'n', value_name = "N", help = "Maximum number of trailing lines to display.")]
    pub lines: Option<usize>,

    /// Maximum characters per displayed line.
    #[arg(long, short = 'w', value_name = "W", help = "Maximum characters per displayed line.")]
    pub width: Option<usize>,

    /// Strip ANSI escape sequences from the output.
    #[arg(long = "strip-ansi", help = "Strip ANSI escape sequences from the output before clipping.")]
    pub strip_ansi: bool,

    /// Path to a custom settings file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom settings file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read JSON input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Extra key names to redact for this run (comma-separated).
    #[arg(long, short = 'f', value_delimiter = ',', help = "Extra key names to redact for this run (comma-separated).")]
    pub filter: Vec<String>,

    /// Path to a custom settings file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom settings file (YAML).")]
    pub config: Option<PathBuf>,
}
