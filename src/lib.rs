//! dotwalk: dotted-path queries over nested, JSON-like documents.
//!
//! ```
//! use dotwalk::{Document, delete, get};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), dotwalk::PathError> {
//! let doc = Document::from(json!({"a": [{"b": 1}, {"b": 2}]}));
//! assert_eq!(get(&doc, "a[*].b")?, Document::from(json!([1, 2])));
//!
//! let cleaned = delete(&doc, "a[0]")?;
//! assert_eq!(cleaned, Document::from(json!({"a": [null, {"b": 2}]})));
//! assert_eq!(get(&cleaned, "a[0].b")?, Document::Null);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;

pub use dotwalk_path::{
    Condition, DEFAULT_MAX_SEGMENTS, KeyStep, Limits, Path, PathError, Query, Segment, Transform,
    TransformError, TransformRegistry, delete, delete_all, flatten_wildcard, get, parse_path,
    parse_path_with, parse_segment, resolve, resolve_segment,
};
pub use dotwalk_types::{Document, DropLevel, remove_empty_values};
pub use error::CliError;
