// scrublog/src/settings_path.rs
//! Settings resolution for the CLI.
//!
//! An explicit `--config` path must load cleanly; the default location
//! (`<config dir>/scrublog/config.yml`) is optional and silently falls
//! back to defaults when absent.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use scrublog_core::Settings;

/// The default settings file location, when a config directory exists.
pub fn default_settings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrublog").join("config.yml"))
}

/// Loads settings for a command run.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()));
    }
    match default_settings_file() {
        Some(path) if path.is_file() => Settings::load_from_file(&path)
            .with_context(|| format!("failed to load settings from '{}'", path.display())),
        _ => {
            debug!("no settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
