//! matcher.rs - Sensitive-key detection and the encrypted-value pattern.
//!
//! This module owns the process-wide constants that decide what gets
//! redacted: the fixed set of sensitive key-name fragments and the
//! pattern for values that are already encrypted. Both predicates are
//! pure; per-call additions arrive through a [`Filter`] and never touch
//! the global constants.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Key;

/// The literal substituted for any redacted value.
pub const FILTERED: &str = "[FILTERED]";

/// Key-name fragments that mark a mapping key as sensitive.
///
/// Matching is case-insensitive substring containment against the key's
/// textual form. Key names only; values are never inspected against this
/// set.
pub const SENSITIVE_KEY_FRAGMENTS: [&str; 5] = ["password", "pwd", "secret", "token", "crypt"];

// Values shaped like `v<digit>:{<payload>}` are pre-encrypted tokens and
// get redacted regardless of their key name.
static ENCRYPTED_VALUE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v\d:\{.*\}$").expect("encrypted-value pattern"));

/// Caller-supplied extra key names to redact for a single call.
///
/// A `Filter` holds zero or more names, compared the same way the fixed
/// fragment set is: case-insensitive containment against the key text.
/// It is merged into the working set per call and never mutates the
/// global constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    names: Vec<String>,
}

impl Filter {
    /// The empty filter: only the fixed fragment set applies.
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter holding a single extra key name.
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into().to_lowercase()],
        }
    }

    /// A filter holding a set of extra key names.
    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.into().to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn matches(&self, key_text_lower: &str) -> bool {
        self.names
            .iter()
            .any(|name| key_text_lower.contains(name.as_str()))
    }
}

impl From<&str> for Filter {
    fn from(name: &str) -> Self {
        Filter::one(name)
    }
}

impl From<String> for Filter {
    fn from(name: String) -> Self {
        Filter::one(name)
    }
}

impl From<Vec<String>> for Filter {
    fn from(names: Vec<String>) -> Self {
        Filter::many(names)
    }
}

impl From<&[&str]> for Filter {
    fn from(names: &[&str]) -> Self {
        Filter::many(names.iter().copied())
    }
}

/// Returns true if `name` case-insensitively contains a fragment from
/// [`SENSITIVE_KEY_FRAGMENTS`] or any entry of `extra`.
pub fn is_sensitive_name(name: &str, extra: &Filter) -> bool {
    let lower = name.to_lowercase();
    SENSITIVE_KEY_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
        || extra.matches(&lower)
}

/// Key-form variant of [`is_sensitive_name`]; all key representations go
/// through [`Key::as_text`] before comparison.
pub fn is_sensitive_key(key: &Key, extra: &Filter) -> bool {
    is_sensitive_name(key.as_text(), extra)
}

/// Returns true if `value` matches the encrypted-value pattern, e.g.
/// `v2:{c5qTeiuz6JgbBOiDqp3eiQ==}`.
pub fn looks_encrypted(value: &str) -> bool {
    ENCRYPTED_VALUE_PATTERN.is_match(value)
}
