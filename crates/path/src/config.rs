//! Resolution limits.
use serde::Deserialize;

/// Default cap on path segments, and therefore on wildcard recursion depth.
pub const DEFAULT_MAX_SEGMENTS: usize = 64;

/// Bounds applied when parsing and resolving paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    /// The maximum number of `.`-separated segments a path may contain.
    pub max_segments: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}
