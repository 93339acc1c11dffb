//! Recursive, in-place merging of nodes.
//!
//! Nodes on both sides merge key by key; anywhere else the source value wins.
//! Destination keys the source does not mention are left alone.

use log::trace;
use serde_json::Value;

use crate::resolve::ensure_path;
use crate::types::Node;

/// Merge `source` into `destination`.
///
/// Nodes present on both sides are merged recursively. A terminal on either
/// side is overwritten by the source value. Nodes adopted from `source` are
/// copied, so later edits to one tree never show up in the other.
///
/// # Example
///
/// ```
/// use nmsp::{extend, Node};
/// use serde_json::{json, Value};
///
/// let mut dest: Node = serde_json::from_value(json!({"a": 1, "b": {"c": 1}})).unwrap();
/// let src: Node = serde_json::from_value(json!({"b": {"d": 1}})).unwrap();
/// extend(&mut dest, &src);
/// assert_eq!(Value::Object(dest), json!({"a": 1, "b": {"c": 1, "d": 1}}));
/// ```
pub fn extend(destination: &mut Node, source: &Node) {
    for (key, value) in source {
        match value {
            Value::Object(src) => match destination.get_mut(key) {
                Some(Value::Object(dst)) => {
                    trace!("merging node at `{key}`");
                    extend(dst, src);
                }
                _ => {
                    let mut adopted = Node::new();
                    extend(&mut adopted, src);
                    destination.insert(key.clone(), Value::Object(adopted));
                }
            },
            terminal => {
                destination.insert(key.clone(), terminal.clone());
            }
        }
    }
}

/// Merge `source` into the node at `path` inside `destination`.
///
/// The path is resolved in create mode, so missing levels are added and any
/// terminal along it is replaced by a node.
///
/// # Example
///
/// ```
/// use nmsp::{extend_at, Node};
/// use serde_json::{json, Value};
///
/// let mut dest: Node = serde_json::from_value(json!({"a": 1, "b": {"c": 1}})).unwrap();
/// let src: Node = serde_json::from_value(json!({"f": "f"})).unwrap();
/// extend_at(&mut dest, "b.d.e", &src);
/// assert_eq!(
///     Value::Object(dest),
///     json!({"a": 1, "b": {"c": 1, "d": {"e": {"f": "f"}}}})
/// );
/// ```
pub fn extend_at(destination: &mut Node, path: &str, source: &Node) {
    extend(ensure_path(path, destination), source);
}

/// Merge two arbitrary values with the same policy as [`extend`].
///
/// If both are nodes they are merged; otherwise `destination` becomes a copy
/// of `source`.
pub fn extend_value(destination: &mut Value, source: &Value) {
    match (destination, source) {
        (Value::Object(dst), Value::Object(src)) => extend(dst, src),
        (destination, source) => *destination = source.clone(),
    }
}
