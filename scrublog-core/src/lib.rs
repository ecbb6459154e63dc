// scrublog-core/src/lib.rs
//! # Scrublog Core Library
//!
//! `scrublog-core` provides the fundamental, platform-independent logic for
//! keeping log output safe: recursive key-based redaction of structured data,
//! byte-size capping of formatted messages, and safe retrieval of the trailing
//! portion of on-disk log files that may contain encoding-invalid bytes.
//!
//! The library is designed to be pure and stateless: every operation executes
//! synchronously on the caller's thread, the redaction constants are immutable
//! process-wide, and file access is scoped to a single call.
//!
//! ## Modules
//!
//! * `matcher`: Sensitive-key fragments, the encrypted-value pattern, and the
//!   call-scoped [`Filter`] for extra key names.
//! * `node`: The [`Node`] value tree, textual/symbolic [`Key`]s, and the
//!   [`HashLike`] capability trait the sanitizer is polymorphic over.
//! * `sanitize`: The recursive redaction walk and its deterministic
//!   block-style dump.
//! * `cap`: Byte-size bounding for formatted messages.
//! * `tail`: Safe tail retrieval with the [`TailSource`] seam.
//! * `config`: Optional YAML-loaded [`Settings`].
//! * `errors`: The [`ScrubError`] type for the settings seam.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrublog_core::{sanitize_json, SanitizeOptions};
//!
//! let payload = serde_json::json!({
//!     "user": "alice",
//!     "password": "hunter2",
//!     "session": {"token": "abc", "ttl": 30}
//! });
//!
//! let dump = sanitize_json(&payload, &SanitizeOptions::default());
//! assert_eq!(
//!     dump,
//!     "user: alice\npassword: [FILTERED]\nsession:\n  token: [FILTERED]\n  ttl: 30\n"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Nothing in the core is fatal. Missing or empty log files yield empty
//! strings, invalid byte sequences are filtered out of tail output, and
//! oversized messages are silently truncated. Only the optional settings
//! layer returns [`ScrubError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cap;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod node;
pub mod sanitize;
pub mod tail;

/// Re-exports the redaction predicates and constants.
pub use matcher::{is_sensitive_key, is_sensitive_name, looks_encrypted, Filter, FILTERED};

/// Re-exports the loggable value tree and the hash-like capability.
pub use node::{Dict, HashLike, IndifferentDict, Key, Node};

/// Re-exports the sanitizer entry points.
pub use sanitize::{dict, sanitize, sanitize_json, sanitize_map, SanitizeOptions};

/// Re-exports message capping.
pub use cap::{cap, cap_default, DEFAULT_MAX_MESSAGE_BYTES};

/// Re-exports safe tail retrieval.
pub use tail::{clip_line, contents, contents_from, FileTail, TailSource};

/// Re-exports the settings layer.
pub use config::Settings;

/// Re-exports the custom error type.
pub use errors::ScrubError;
