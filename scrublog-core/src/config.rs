//! Configuration management for `scrublog-core`.
//!
//! Settings are optional: every knob has a default matching the fixed
//! behavior of the core, and a missing settings file simply means
//! defaults. Extra sensitive key names configured here are merged into
//! the working set per call; the process-wide fragment constants are
//! never mutated.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cap::DEFAULT_MAX_MESSAGE_BYTES;
use crate::errors::ScrubError;
use crate::matcher::Filter;

/// Top-level settings structure for scrublog.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Additional key names to redact beyond the built-in fragments.
    pub extra_sensitive_keys: Vec<String>,
    /// Overrides the 1 MiB default message cap when set.
    pub max_message_bytes: Option<usize>,
    /// Default trailing-line bound for tail display.
    pub tail_lines: Option<usize>,
    /// Default per-line character width for tail display.
    pub tail_width: Option<usize>,
}

impl Settings {
    /// Loads settings from a YAML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScrubError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ScrubError::SettingsRead(path.display().to_string(), err))?;
        let settings: Settings = serde_yml::from_str(&raw)
            .map_err(|err| ScrubError::SettingsParse(path.display().to_string(), err))?;
        debug!(
            "loaded settings from '{}': {} extra sensitive key(s)",
            path.display(),
            settings.extra_sensitive_keys.len()
        );
        Ok(settings)
    }

    /// The call-scoped filter derived from `extra_sensitive_keys`.
    pub fn working_filter(&self) -> Filter {
        Filter::many(self.extra_sensitive_keys.iter().cloned())
    }

    /// The effective per-message byte cap.
    pub fn message_cap(&self) -> usize {
        self.max_message_bytes.unwrap_or(DEFAULT_MAX_MESSAGE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.extra_sensitive_keys.is_empty());
        assert_eq!(settings.message_cap(), 1_048_576);
        assert!(settings.working_filter().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = "extra_sensitive_keys:\n  - session\n  - csrf\nmax_message_bytes: 2048\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.extra_sensitive_keys, vec!["session", "csrf"]);
        assert_eq!(settings.message_cap(), 2048);
        assert_eq!(settings.tail_lines, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load_from_file("/nonexistent/scrublog.yml").unwrap_err();
        assert!(matches!(err, ScrubError::SettingsRead(_, _)));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"extra_sensitive_keys: {not a list").unwrap();
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScrubError::SettingsParse(_, _)));
    }
}
