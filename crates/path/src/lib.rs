//! Dotted path lookup and tombstone deletion over nested documents.
//!
//! A path like `orders[0].lines[*].sku` is split on `.` into segments: plain
//! keys, keys with a sequence index, and wildcards that fan the rest of the
//! path out over every element of a sequence. Lookups never fail on missing
//! data; they resolve to a default. Deletion writes `null` into a copy of the
//! document.

pub mod ast;
pub mod config;
pub mod delete;
pub mod engine;
pub mod error;
pub mod functions;
mod parser;
pub mod query;

// --- Public API ---
pub use ast::{KeyStep, Path, Segment};
pub use config::{DEFAULT_MAX_SEGMENTS, Limits};
pub use delete::{delete, delete_all};
pub use engine::{flatten_wildcard, resolve, resolve_segment};
pub use error::{PathError, TransformError};
pub use functions::{Transform, TransformRegistry};
pub use parser::{parse_path, parse_path_with, parse_segment};
pub use query::{Condition, Query, get};
