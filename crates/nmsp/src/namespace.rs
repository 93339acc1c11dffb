//! Namespaces: a node that carries its own merge and lookup operations.

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extend::{extend, extend_at};
use crate::plain::plain;
use crate::resolve::{at_path, from_path};
use crate::types::Node;

/// What a [`Namespace`] starts out from.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// The skeleton implied by a dotted path.
    Path(String),
    /// An existing node, taken over as-is.
    Node(Node),
}

impl From<&str> for Seed {
    fn from(path: &str) -> Self {
        Seed::Path(path.to_string())
    }
}

impl From<String> for Seed {
    fn from(path: String) -> Self {
        Seed::Path(path)
    }
}

impl From<Node> for Seed {
    fn from(node: Node) -> Self {
        Seed::Node(node)
    }
}

/// Create a namespace.
///
/// - `None` starts from an empty node.
/// - [`Seed::Path`] starts from the skeleton of the path, so `"a.b"` gives
///   `{"a": {"b": {}}}`.
/// - [`Seed::Node`] takes ownership of the node without copying it.
///
/// # Example
///
/// ```
/// use nmsp::create;
/// use serde_json::json;
///
/// let ns = create(Some("a.b.c.d".into()));
/// assert_eq!(ns, json!({"a": {"b": {"c": {"d": {}}}}}));
/// ```
pub fn create(seed: Option<Seed>) -> Namespace {
    match seed {
        None => Namespace::new(),
        Some(Seed::Path(path)) => Namespace::from_path(&path),
        Some(Seed::Node(node)) => Namespace::from_node(node),
    }
}

/// A node with `extend` and `at_path` operations bound to it.
///
/// The operations are methods, not data: they never show up among the keys,
/// in [`Namespace::plain`] or in the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    data: Node,
}

impl Namespace {
    /// An empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A namespace holding the skeleton of `path`.
    pub fn from_path(path: &str) -> Self {
        Self {
            data: from_path(path),
        }
    }

    /// A namespace wrapping `data`.
    pub fn from_node(data: Node) -> Self {
        Self { data }
    }

    /// Deep-merge `source` into this namespace.
    ///
    /// Returns nothing; calls do not chain.
    pub fn extend(&mut self, source: &Node) {
        extend(&mut self.data, source);
    }

    /// Deep-merge `source` into the node at `path`, creating it if needed.
    pub fn extend_at(&mut self, path: &str, source: &Node) {
        extend_at(&mut self.data, path, source);
    }

    /// Look up the value at `path` without creating anything.
    pub fn at_path(&self, path: &str) -> Option<&Value> {
        at_path(path, &self.data)
    }

    /// A copy of the data, without the namespace wrapper.
    pub fn plain(&self) -> Node {
        plain(&self.data)
    }

    /// The underlying node.
    pub fn data(&self) -> &Node {
        &self.data
    }

    /// Mutable access to the underlying node.
    pub fn data_mut(&mut self) -> &mut Node {
        &mut self.data
    }

    /// Unwrap into the underlying node.
    pub fn into_inner(self) -> Node {
        self.data
    }
}

impl Deref for Namespace {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.data
    }
}

impl DerefMut for Namespace {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.data
    }
}

impl From<Node> for Namespace {
    fn from(data: Node) -> Self {
        Self::from_node(data)
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}

impl From<Namespace> for Node {
    fn from(ns: Namespace) -> Self {
        ns.data
    }
}

impl From<Namespace> for Value {
    fn from(ns: Namespace) -> Self {
        Value::Object(ns.data)
    }
}

impl PartialEq<Node> for Namespace {
    fn eq(&self, other: &Node) -> bool {
        &self.data == other
    }
}

impl PartialEq<Value> for Namespace {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Object(node) if node == &self.data)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Namespace operations on a node the caller keeps owning.
///
/// Merges go straight into the borrowed node, so this is the way to extend a
/// structure in place without handing it over to a [`Namespace`].
///
/// # Example
///
/// ```
/// use nmsp::{Node, NodeExt};
/// use serde_json::json;
///
/// let mut config: Node = serde_json::from_value(json!({"a": 1})).unwrap();
/// let extra: Node = serde_json::from_value(json!({"c": 1})).unwrap();
/// config.deep_extend_at("b", &extra);
/// assert_eq!(config.at_path("b.c"), Some(&json!(1)));
/// ```
pub trait NodeExt {
    fn deep_extend(&mut self, source: &Node);
    fn deep_extend_at(&mut self, path: &str, source: &Node);
    fn at_path(&self, path: &str) -> Option<&Value>;
}

impl NodeExt for Node {
    fn deep_extend(&mut self, source: &Node) {
        extend(self, source);
    }

    fn deep_extend_at(&mut self, path: &str, source: &Node) {
        extend_at(self, path, source);
    }

    fn at_path(&self, path: &str) -> Option<&Value> {
        at_path(path, self)
    }
}
