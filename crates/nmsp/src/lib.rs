//! Dotted-path addressing and deep merging over JSON objects.
//!
//! A [`Node`] is a `serde_json` object. Paths such as `"a.b.c"` address
//! nested nodes; [`at_path`] looks them up, [`ensure_path`] creates them, and
//! [`extend`] merges one node into another without dropping unrelated keys.
//! [`Namespace`] bundles a node with those operations as methods.
//!
//! # Example
//!
//! ```
//! use nmsp::{create, Node};
//! use serde_json::json;
//!
//! let mut ns = create(None);
//! let settings: Node = serde_json::from_value(json!({"a": 1, "b": {"c": 1}})).unwrap();
//! ns.extend(&settings);
//!
//! let more: Node = serde_json::from_value(json!({"f": "f"})).unwrap();
//! ns.extend_at("b.d.e", &more);
//!
//! assert_eq!(ns, json!({"a": 1, "b": {"c": 1, "d": {"e": {"f": "f"}}}}));
//! assert_eq!(ns.at_path("b.d"), Some(&json!({"e": {"f": "f"}})));
//! ```

use thiserror::Error;

pub mod cli;
pub mod extend;
pub mod namespace;
pub mod plain;
pub mod resolve;
pub mod types;
pub mod validate;

pub use extend::{extend, extend_at, extend_value};
pub use namespace::{create, Namespace, NodeExt, Seed};
pub use plain::{plain, plain_value};
pub use resolve::{at_path, at_path_mut, ensure_path, from_path, resolve};
pub use types::{is_node, is_terminal, Node, ResolveMode, SEPARATOR};
pub use validate::validate_path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path segment {index} is empty")]
    EmptySegment { index: usize },
    #[error("path too long")]
    TooLong,
    #[error("path too deep")]
    TooDeep,
}
