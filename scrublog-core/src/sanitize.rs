//! sanitize.rs - Recursive key-based redaction of structured data.
//!
//! The sanitizer walks a [`Node`] tree depth-first and produces a
//! deterministic block-style dump suitable for direct inclusion in a log
//! line: one `key: value` per line, nested containers indented two
//! spaces, sequence elements introduced by `- `. A value is replaced by
//! the `[FILTERED]` marker when its key matches the sensitive set (the
//! whole subtree, for container values) or when the leaf itself looks
//! like a pre-encrypted token. Key order is encounter order, so equal
//! inputs dump byte-for-byte equal across runs.
//!
//! The map walk is generic over [`HashLike`], so any container exposing
//! ordered key/value iteration sanitizes the same way as a plain
//! [`Dict`].
//!
//! License: MIT OR APACHE 2.0

use crate::matcher::{self, Filter, FILTERED};
use crate::node::{Dict, HashLike, Node};

const INDENT: &str = "  ";

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Per-call options for the sanitizer.
#[derive(Debug, Clone, Default)]
pub struct SanitizeOptions {
    /// Extra key names to redact for this call only; merged with the
    /// fixed fragment set, never into it.
    pub filter: Filter,
}

impl SanitizeOptions {
    /// Options with an extra filter; accepts a single name or a set.
    pub fn with_filter(filter: impl Into<Filter>) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

/// Sanitizes a node tree into its loggable dump.
pub fn sanitize(node: &Node, options: &SanitizeOptions) -> String {
    let mut out = String::new();
    match node {
        Node::Map(dict) => write_map(&mut out, dict, 0, &options.filter),
        Node::Seq(items) => write_seq(&mut out, items, 0, &options.filter),
        leaf => {
            out.push_str(&render_leaf(leaf));
            out.push('\n');
        }
    }
    out
}

/// Sanitizes any hash-like container directly.
///
/// This is the polymorphic entry point: an [`crate::node::IndifferentDict`]
/// produces the same dump as the equivalent plain [`Dict`] with textual
/// keys.
pub fn sanitize_map<M: HashLike>(map: &M, options: &SanitizeOptions) -> String {
    let mut out = String::new();
    write_map(&mut out, map, 0, &options.filter);
    out
}

/// Converts a JSON document and sanitizes it.
pub fn sanitize_json(value: &serde_json::Value, options: &SanitizeOptions) -> String {
    sanitize(&Node::from(value), options)
}

fn write_map<M: HashLike + ?Sized>(out: &mut String, map: &M, depth: usize, filter: &Filter) {
    for (key, value) in map.pairs() {
        indent(out, depth);
        out.push_str(key.as_text());
        out.push(':');
        if matcher::is_sensitive_key(key, filter) {
            out.push(' ');
            out.push_str(FILTERED);
            out.push('\n');
            continue;
        }
        match value {
            Node::Map(dict) if dict.is_empty() => out.push_str(" {}\n"),
            Node::Map(dict) => {
                out.push('\n');
                write_map(out, dict, depth + 1, filter);
            }
            Node::Seq(items) if items.is_empty() => out.push_str(" []\n"),
            Node::Seq(items) => {
                out.push('\n');
                write_seq(out, items, depth + 1, filter);
            }
            leaf => {
                out.push(' ');
                out.push_str(&render_leaf(leaf));
                out.push('\n');
            }
        }
    }
}

fn write_seq(out: &mut String, items: &[Node], depth: usize, filter: &Filter) {
    for item in items {
        indent(out, depth);
        match item {
            Node::Map(dict) if dict.is_empty() => out.push_str("- {}\n"),
            Node::Map(dict) => {
                out.push_str("-\n");
                write_map(out, dict, depth + 1, filter);
            }
            Node::Seq(inner) if inner.is_empty() => out.push_str("- []\n"),
            Node::Seq(inner) => {
                out.push_str("-\n");
                write_seq(out, inner, depth + 1, filter);
            }
            leaf => {
                out.push_str("- ");
                out.push_str(&render_leaf(leaf));
                out.push('\n');
            }
        }
    }
}

// Scalar leaves pass through unchanged unless they look pre-encrypted.
fn render_leaf(node: &Node) -> String {
    if let Node::Str(s) = node {
        if matcher::looks_encrypted(s) {
            return FILTERED.to_string();
        }
    }
    node.scalar_text().unwrap_or_default()
}

/// Builds a [`Dict`] from key/value pairs; test and doc convenience.
pub fn dict<K, V, I>(pairs: I) -> Dict
where
    K: Into<crate::node::Key>,
    V: Into<Node>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}
