//! cap.rs - Byte-size bounding for formatted log messages.
//!
//! Applied once per emitted line, after formatting and redaction. The
//! bound is counted in encoded bytes, not characters; truncation backs
//! off to the nearest `char` boundary so the result is always valid
//! UTF-8 (for ASCII input the prefix is exactly the requested length).
//! Truncation is silent: callers needing to know compare lengths.
//!
//! License: MIT OR APACHE 2.0

/// Default maximum size of a single log message: 1 MiB.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1_048_576;

/// Truncates `message` to at most `max_bytes` encoded bytes.
///
/// Messages at or under the bound are returned unchanged; capping is an
/// idempotent no-op for them.
pub fn cap(message: &str, max_bytes: usize) -> &str {
    if message.len() <= max_bytes {
        return message;
    }
    let mut end = max_bytes;
    while end > 0 && !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

/// [`cap`] with the default 1 MiB bound.
pub fn cap_default(message: &str) -> &str {
    cap(message, DEFAULT_MAX_MESSAGE_BYTES)
}
