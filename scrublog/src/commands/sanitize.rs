// scrublog/src/commands/sanitize.rs
//! The `sanitize` command: redact a structured JSON payload and print
//! its loggable dump.

use std::io::Read;

use anyhow::{Context, Result};
use log::debug;
use scrublog_core::{cap, sanitize_json, Filter, SanitizeOptions};

use crate::cli::SanitizeCommand;
use crate::settings_path;

pub fn run(cmd: &SanitizeCommand) -> Result<()> {
    let settings = settings_path::load(cmd.config.as_deref())?;

    let input = match &cmd.input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            buf
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&input).context("input is not valid JSON")?;

    let mut extra = settings.extra_sensitive_keys.clone();
    extra.extend(cmd.filter.iter().cloned());
    debug!("sanitizing with {} extra filter key(s)", extra.len());

    let options = SanitizeOptions {
        filter: Filter::many(extra),
    };
    let dump = sanitize_json(&value, &options);
    let capped = cap(&dump, settings.message_cap());

    print!("{capped}");
    Ok(())
}
