use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in a parsed document tree.
///
/// A node is exactly one of three kinds. Scalars are opaque leaf values
/// compared by their text. Mappings keep the encounter order of their keys
/// for iteration, but that order carries no meaning for equality or diffing.
/// Lists are position-significant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// An opaque leaf value.
    Scalar(String),
    /// Ordered `(key, value)` pairs.
    ///
    /// Keys are expected to be unique; [`Node::mapping`] and the YAML front
    /// end guarantee it. A hand-built mapping that repeats a key is read by
    /// its first occurrence everywhere: lookup, equality and diffing.
    Mapping(Vec<(String, Node)>),
    /// Ordered items.
    List(Vec<Node>),
}

/// The structural kind of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Scalar,
    Mapping,
    List,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Mapping => write!(f, "mapping"),
            Self::List => write!(f, "list"),
        }
    }
}

impl Node {
    /// Create a scalar node.
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    /// Create a mapping node from `(key, value)` pairs.
    ///
    /// Keys stay in first-seen order. A repeated key replaces the earlier
    /// value in place, so the result always has unique keys.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let mut out: Vec<(String, Node)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Self::Mapping(out)
    }

    /// Create a list node.
    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// The structural kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Mapping(_) => NodeKind::Mapping,
            Self::List(_) => NodeKind::List,
        }
    }

    /// Returns `true` for scalar nodes.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// The scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Look up a key in a mapping node. Returns `None` for other kinds.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Mapping(entries) => lookup(entries, key),
            _ => None,
        }
    }

    /// Returns `true` for mappings and lists without entries.
    ///
    /// Scalars are never empty, even when their text is.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::Mapping(entries) => entries.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

/// Find the value stored under `key` in a list of mapping entries.
pub(crate) fn lookup<'a>(entries: &'a [(String, Node)], key: &str) -> Option<&'a Node> {
    entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            // Key order is presentation only.
            (Self::Mapping(a), Self::Mapping(b)) => covers(a, b) && covers(b, a),
            _ => false,
        }
    }
}

impl Eq for Node {}

/// Every key of `a`, read by its first occurrence, is in `b` with an equal value.
fn covers(a: &[(String, Node)], b: &[(String, Node)]) -> bool {
    a.iter().enumerate().all(|(i, (key, value))| {
        a[..i].iter().any(|(k, _)| k == key) || lookup(b, key).is_some_and(|other| value == other)
    })
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Scalar(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(height: &str) -> Node {
        Node::mapping([
            ("Height", Node::mapping([("cm", Node::scalar(height))])),
            ("CanFight", Node::scalar("yes")),
        ])
    }

    #[test]
    fn kinds() {
        assert_eq!(Node::scalar("a").kind(), NodeKind::Scalar);
        assert_eq!(Node::list([]).kind(), NodeKind::List);
        assert_eq!(person("1").kind(), NodeKind::Mapping);
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
    }

    #[test]
    fn mapping_equality_ignores_key_order() {
        let a = Node::mapping([("x", Node::scalar("1")), ("y", Node::scalar("2"))]);
        let b = Node::mapping([("y", Node::scalar("2")), ("x", Node::scalar("1"))]);
        assert_eq!(a, b);
    }

    #[test]
    fn list_equality_is_positional() {
        let a = Node::list([Node::scalar("1"), Node::scalar("2")]);
        let b = Node::list([Node::scalar("2"), Node::scalar("1")]);
        assert_ne!(a, b);
    }

    #[test]
    fn nested_inequality() {
        assert_eq!(person("168"), person("168"));
        assert_ne!(person("168"), person("190"));
    }

    #[test]
    fn different_kinds_never_equal() {
        assert_ne!(Node::scalar("a"), Node::list([Node::scalar("a")]));
        assert_ne!(Node::mapping(Vec::<(String, Node)>::new()), Node::list([]));
    }

    #[test]
    fn repeated_key_is_read_by_first_occurrence() {
        let dup = Node::Mapping(vec![
            ("x".into(), Node::scalar("1")),
            ("x".into(), Node::scalar("2")),
        ]);
        let single = Node::Mapping(vec![("x".into(), Node::scalar("1"))]);
        assert_eq!(dup, single);
        assert_eq!(single, dup);
        assert_eq!(dup.get("x"), Some(&Node::scalar("1")));
        assert_ne!(dup, Node::Mapping(vec![("x".into(), Node::scalar("2"))]));
    }

    #[test]
    fn mapping_with_extra_key_not_equal() {
        let a = Node::mapping([("x", Node::scalar("1"))]);
        let b = Node::mapping([("x", Node::scalar("1")), ("y", Node::scalar("2"))]);
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn duplicate_keys_replace_in_place() {
        let node = Node::mapping([
            ("a", Node::scalar("1")),
            ("b", Node::scalar("2")),
            ("a", Node::scalar("3")),
        ]);
        match &node {
            Node::Mapping(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0], ("a".to_string(), Node::scalar("3")));
            }
            other => panic!("expected Mapping, got {:?}", other),
        }
    }

    #[test]
    fn accessors() {
        let node = person("168");
        assert_eq!(
            node.get("Height").and_then(|h| h.get("cm")).and_then(Node::as_scalar),
            Some("168")
        );
        assert!(node.get("Weight").is_none());
        assert!(Node::scalar("x").get("x").is_none());
        assert!(Node::list([]).is_empty());
        assert!(!Node::scalar("").is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let node = person("168");
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
