//! node.rs - The loggable value tree fed to the sanitizer.
//!
//! Mapping keys in logged structures arrive in mixed representations:
//! plain text, symbolic/interned identifiers, or wrappers that accept
//! either form interchangeably. [`Key`] normalizes all of them through a
//! single [`Key::as_text`] boundary, so the matcher never special-cases
//! key representation. [`HashLike`] is the capability the sanitizer
//! walks: anything that can iterate its key/value pairs in a stable
//! order can be sanitized, not just one concrete container type.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

/// A mapping key in textual or symbolic form.
///
/// Two keys with equal text compare equal for matching purposes even
/// when their representations differ; only identity-sensitive callers
/// (e.g. [`IndifferentDict::get`]) care about the distinction, and even
/// there access is indifferent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A plain textual key, e.g. `"password"`.
    Text(String),
    /// A symbolic/interned identifier, e.g. `:password` in the source data.
    Symbol(String),
}

impl Key {
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    /// The single normalization boundary: every comparison and every
    /// dump line uses this textual form.
    pub fn as_text(&self) -> &str {
        match self {
            Key::Text(name) | Key::Symbol(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Text(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Text(name)
    }
}

/// Any value fed to the sanitizer: a mapping, a sequence, or a scalar.
///
/// Constructed by the caller, consumed once per log call, never retained.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Node>),
    Map(Dict),
}

impl Node {
    /// Default textual rendering for scalar leaves; `None` for containers.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Node::Null => Some("null".to_string()),
            Node::Bool(b) => Some(b.to_string()),
            Node::Int(i) => Some(i.to_string()),
            Node::Float(f) => Some(f.to_string()),
            Node::Str(s) => Some(s.clone()),
            Node::Seq(_) | Node::Map(_) => None,
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Str(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Str(value)
    }
}

impl From<Dict> for Node {
    fn from(value: Dict) -> Self {
        Node::Map(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Seq(value)
    }
}

impl From<&serde_json::Value> for Node {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Int(i),
                None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Node::Str(s.clone()),
            serde_json::Value::Array(items) => Node::Seq(items.iter().map(Node::from).collect()),
            serde_json::Value::Object(map) => {
                let mut dict = Dict::new();
                for (key, val) in map {
                    dict.insert(Key::text(key), Node::from(val));
                }
                Node::Map(dict)
            }
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        Node::from(&value)
    }
}

/// The capability the sanitizer is polymorphic over: iteration of
/// key/value pairs in a stable, encounter order.
pub trait HashLike {
    /// Iterate the container's pairs in encounter order.
    fn pairs(&self) -> Box<dyn Iterator<Item = (&Key, &Node)> + '_>;

    fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

/// A plain insertion-ordered mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: Vec<(Key, Node)>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair; an existing entry with the same key text is
    /// replaced in place, keeping its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|(k, _)| k.as_text() == key.as_text())
        {
            existing.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_text() == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HashLike for Dict {
    fn pairs(&self) -> Box<dyn Iterator<Item = (&Key, &Node)> + '_> {
        Box::new(self.entries.iter().map(|(k, v)| (k, v)))
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>, V: Into<Node>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

/// A mapping with indifferent text/symbol access: a key stored as a
/// symbol is found by its text and vice versa.
///
/// Sanitizing an `IndifferentDict` produces the same dump as sanitizing
/// the equivalent plain [`Dict`] with textual keys, because both expose
/// their pairs through [`HashLike`] and all key comparisons go through
/// [`Key::as_text`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndifferentDict {
    inner: Dict,
}

impl IndifferentDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) {
        self.inner.insert(key, value);
    }

    /// Indifferent lookup: matches whichever representation the entry
    /// was stored under.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.inner.get(name)
    }
}

impl HashLike for IndifferentDict {
    fn pairs(&self) -> Box<dyn Iterator<Item = (&Key, &Node)> + '_> {
        self.inner.pairs()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalization() {
        assert_eq!(Key::text("password").as_text(), "password");
        assert_eq!(Key::symbol("password").as_text(), "password");
        assert_eq!(Key::symbol("login").to_string(), "login");
    }

    #[test]
    fn test_dict_preserves_insertion_order() {
        let mut dict = Dict::new();
        dict.insert("b", 1i64);
        dict.insert("a", 2i64);
        dict.insert("c", 3i64);
        let keys: Vec<&str> = dict.pairs().map(|(k, _)| k.as_text()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dict_insert_replaces_same_text_key() {
        let mut dict = Dict::new();
        dict.insert(Key::symbol("name"), "first");
        dict.insert(Key::text("name"), "second");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("name"), Some(&Node::Str("second".to_string())));
    }

    #[test]
    fn test_indifferent_access() {
        let mut dict = IndifferentDict::new();
        dict.insert(Key::symbol("token"), "abc");
        assert_eq!(dict.get("token"), Some(&Node::Str("abc".to_string())));
    }

    #[test]
    fn test_node_from_json_value() {
        let value = serde_json::json!({
            "name": "alice",
            "age": 42,
            "ratio": 0.5,
            "active": true,
            "tags": ["a", "b"],
            "extra": null
        });
        let node = Node::from(&value);
        let Node::Map(dict) = node else {
            panic!("expected a map");
        };
        assert_eq!(dict.get("name"), Some(&Node::Str("alice".to_string())));
        assert_eq!(dict.get("age"), Some(&Node::Int(42)));
        assert_eq!(dict.get("ratio"), Some(&Node::Float(0.5)));
        assert_eq!(dict.get("active"), Some(&Node::Bool(true)));
        assert_eq!(dict.get("extra"), Some(&Node::Null));
        let keys: Vec<&str> = dict.pairs().map(|(k, _)| k.as_text()).collect();
        assert_eq!(keys, vec!["name", "age", "ratio", "active", "tags", "extra"]);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Node::Null.scalar_text().unwrap(), "null");
        assert_eq!(Node::Bool(false).scalar_text().unwrap(), "false");
        assert_eq!(Node::Int(-3).scalar_text().unwrap(), "-3");
        assert_eq!(Node::Str("x".into()).scalar_text().unwrap(), "x");
        assert!(Node::Map(Dict::new()).scalar_text().is_none());
        assert!(Node::Seq(Vec::new()).scalar_text().is_none());
    }
}
