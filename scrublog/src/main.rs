// scrublog/src/main.rs
//! Scrublog entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! handlers.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod settings_path;

use cli::{Cli, Commands};

fn init_logger(cli: &Cli) {
    let mut builder = env_logger::Builder::from_default_env();
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Off);
    } else if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // Ignore a second init from test harnesses.
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli);

    match &cli.command {
        Commands::Tail(cmd) => commands::tail::run(cmd),
        Commands::Sanitize(cmd) => commands::sanitize::run(cmd),
    }
}
