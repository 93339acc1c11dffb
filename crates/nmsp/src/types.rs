//! The values dotted paths address, and how they are resolved.

use serde_json::{Map, Value};

/// A mapping level: string keys to values, insertion ordered.
pub type Node = Map<String, Value>;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// How [`resolve`](crate::resolve) treats segments that are not there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Never mutate; stop at the first missing segment.
    #[default]
    Read,
    /// Insert empty nodes for every missing segment.
    Create,
}

/// Returns true if the value is a [`Node`].
pub fn is_node(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns true if the value is anything other than a [`Node`].
///
/// Arrays count as terminals: they are never merged element-wise.
pub fn is_terminal(value: &Value) -> bool {
    !is_node(value)
}
