//! errors.rs - Custom error types for the scrublog-core library.
//!
//! The sanitization and tail-retrieval core is deliberately infallible:
//! missing files, invalid encodings, and oversized messages all degrade
//! to usable results. The only fallible seam left is the optional
//! settings layer, covered here.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `scrublog-core`
/// library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be
/// added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("failed to read settings file '{0}': {1}")]
    SettingsRead(String, #[source] std::io::Error),

    #[error("failed to parse settings file '{0}': {1}")]
    SettingsParse(String, #[source] serde_yml::Error),

    #[error("an unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
