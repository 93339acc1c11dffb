//! Resolution of dotted paths against a [`Node`].
//!
//! Read-mode lookups never touch the tree. Create-mode lookups materialise
//! every missing segment as an empty node, and a terminal sitting where a
//! node is needed is replaced by an empty node.

use log::debug;
use serde_json::Value;

use crate::types::{is_terminal, Node, ResolveMode, SEPARATOR};

/// Get the value at `path`, without creating anything.
///
/// Returns `None` as soon as a segment is missing, or a terminal is reached
/// while segments remain.
///
/// # Example
///
/// ```
/// use nmsp::at_path;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {"c": 1}}});
/// let root = doc.as_object().unwrap();
/// assert_eq!(at_path("a.b.c", root), Some(&json!(1)));
/// assert_eq!(at_path("a.b.c.d", root), None);
/// ```
pub fn at_path<'a>(path: &str, root: &'a Node) -> Option<&'a Value> {
    let mut steps = path.split(SEPARATOR);
    let mut current = root.get(steps.next()?)?;
    for step in steps {
        current = current.as_object()?.get(step)?;
    }
    Some(current)
}

/// Get a mutable reference to the value at `path`, without creating anything.
pub fn at_path_mut<'a>(path: &str, root: &'a mut Node) -> Option<&'a mut Value> {
    let mut steps = path.split(SEPARATOR);
    let mut current = root.get_mut(steps.next()?)?;
    for step in steps {
        current = current.as_object_mut()?.get_mut(step)?;
    }
    Some(current)
}

/// Get the node at `path`, creating every missing level on the way.
///
/// # Example
///
/// ```
/// use nmsp::{ensure_path, Node};
/// use serde_json::json;
///
/// let mut root = Node::new();
/// ensure_path("a.b", &mut root).insert("c".into(), json!(1));
/// assert_eq!(serde_json::Value::Object(root), json!({"a": {"b": {"c": 1}}}));
/// ```
pub fn ensure_path<'a>(path: &str, root: &'a mut Node) -> &'a mut Node {
    let mut current = root;
    for step in path.split(SEPARATOR) {
        let slot = current
            .entry(step)
            .or_insert_with(|| Value::Object(Node::new()));
        current = coerce_node(step, slot);
    }
    current
}

/// Resolve `path` against `root` in the given mode.
///
/// In [`ResolveMode::Create`] the result is always `Some` and always holds a
/// node. In [`ResolveMode::Read`] this is [`at_path_mut`].
pub fn resolve<'a>(path: &str, root: &'a mut Node, mode: ResolveMode) -> Option<&'a mut Value> {
    match mode {
        ResolveMode::Read => at_path_mut(path, root),
        ResolveMode::Create => {
            let (parent, last) = match path.rsplit_once(SEPARATOR) {
                Some((parent, last)) => (ensure_path(parent, root), last),
                None => (root, path),
            };
            let slot = parent
                .entry(last)
                .or_insert_with(|| Value::Object(Node::new()));
            coerce_node(last, slot);
            Some(slot)
        }
    }
}

/// Build the skeleton implied by `path`: nested empty nodes, one per segment.
///
/// Returns the whole tree, not the innermost node.
///
/// # Example
///
/// ```
/// use nmsp::from_path;
/// use serde_json::json;
///
/// let skeleton = from_path("a.b.c");
/// assert_eq!(serde_json::Value::Object(skeleton), json!({"a": {"b": {"c": {}}}}));
/// ```
pub fn from_path(path: &str) -> Node {
    let mut root = Node::new();
    ensure_path(path, &mut root);
    root
}

fn coerce_node<'a>(step: &str, slot: &'a mut Value) -> &'a mut Node {
    if is_terminal(slot) {
        debug!("replacing terminal {slot} at segment `{step}` with an empty node");
        *slot = Value::Object(Node::new());
    }
    match slot {
        Value::Object(node) => node,
        _ => unreachable!("slot was just made a node"),
    }
}
