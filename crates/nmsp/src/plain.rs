//! Extraction of plain data out of nodes and namespaces.

use serde_json::Value;

use crate::types::Node;

/// Copy the own data keys of `source` into a new node.
///
/// # Example
///
/// ```
/// use nmsp::{plain, Node};
/// use serde_json::json;
///
/// let source: Node = serde_json::from_value(json!({"bar": "Bar"})).unwrap();
/// assert_eq!(plain(&source), source);
/// ```
pub fn plain(source: &Node) -> Node {
    source.clone()
}

/// Copy the own data keys of any value into a new node.
///
/// A terminal has no keys of its own and yields an empty node.
pub fn plain_value(source: &Value) -> Node {
    match source {
        Value::Object(node) => plain(node),
        _ => Node::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_copies_keys() {
        let source = json!({"foo": "Foo", "nested": {"a": 1}});
        let copy = plain_value(&source);
        assert_eq!(Value::Object(copy), source);
    }

    #[test]
    fn test_plain_is_detached() {
        let source: Node = serde_json::from_value(json!({"a": {"b": 1}})).unwrap();
        let mut copy = plain(&source);
        copy["a"]["b"] = json!(2);
        assert_eq!(source["a"]["b"], json!(1));
    }

    #[test]
    fn test_plain_of_terminals() {
        assert!(plain_value(&json!(1)).is_empty());
        assert!(plain_value(&json!("str")).is_empty());
        assert!(plain_value(&json!([1, 2])).is_empty());
        assert!(plain_value(&json!(null)).is_empty());
    }
}
