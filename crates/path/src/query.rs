//! The `get` facade: resolution plus default, condition, transforms and drop policy.

use crate::config::Limits;
use crate::engine;
use crate::error::{PathError, TransformError};
use crate::functions::Transform;
use crate::parser::parse_path_with;
use dotwalk_types::{Document, DropLevel};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A predicate deciding whether a resolved value is kept.
pub type Condition = Arc<dyn Fn(&Document) -> bool + Send + Sync>;

/// A reusable lookup of one dotted path.
///
/// ```
/// use dotwalk_path::Query;
/// use dotwalk_types::{Document, DropLevel};
///
/// # fn main() -> Result<(), dotwalk_path::PathError> {
/// let document = Document::from(serde_json::json!({
///     "patient": { "name": [{ "given": "Ann" }] }
/// }));
/// let query = Query::new("patient.name[0].given").with_default("unknown");
/// assert_eq!(query.get(&document)?, Document::from("Ann"));
///
/// let missing = Query::new("patient.name[1].given").with_drop_level(DropLevel::PARENT);
/// assert_eq!(missing.get(&document)?, Document::Drop(DropLevel::PARENT));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Query {
    path: String,
    default: Document,
    transforms: Vec<Transform>,
    condition: Option<Condition>,
    drop_level: Option<DropLevel>,
    limits: Limits,
}

impl Query {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default: Document::Null,
            transforms: Vec::new(),
            condition: None,
            drop_level: None,
            limits: Limits::default(),
        }
    }

    /// The value returned when the path resolves to nothing.
    pub fn with_default(mut self, default: impl Into<Document>) -> Self {
        self.default = default.into();
        self
    }

    /// Appends a transform, run on truthy results in the order added.
    pub fn with_transform<F>(self, transform: F) -> Self
    where
        F: Fn(Document) -> Result<Document, TransformError> + Send + Sync + 'static,
    {
        self.with_shared_transform(Arc::new(transform))
    }

    /// Appends an already shared transform, e.g. one from a `TransformRegistry`.
    pub fn with_shared_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Keeps a present value only if `condition` holds for it.
    pub fn with_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Document) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Returns `Document::Drop(level)` instead of an absent value.
    pub fn with_drop_level(mut self, level: DropLevel) -> Self {
        self.drop_level = Some(level);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs the query. The document is only read.
    pub fn get(&self, document: &Document) -> Result<Document, PathError> {
        let path = parse_path_with(&self.path, &self.limits)?;
        let mut value = engine::resolve(document, &path)
            .filter(|v| !v.is_absent())
            .unwrap_or_else(|| self.default.clone());

        if let Some(condition) = &self.condition {
            if !value.is_absent() && !condition(&value) {
                debug!("Condition rejected value at '{}'", self.path);
                value = Document::Null;
            }
        }

        if value.is_truthy() {
            for transform in &self.transforms {
                value = transform(value).map_err(|source| PathError::Transform {
                    path: self.path.clone(),
                    source,
                })?;
                if value.is_absent() {
                    break;
                }
            }
        }

        if value.is_absent() {
            if let Some(level) = self.drop_level {
                debug!("'{}' is absent, marking with {}", self.path, level);
                value = Document::Drop(level);
            }
        }
        Ok(value)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("path", &self.path)
            .field("default", &self.default)
            .field("transforms", &self.transforms.len())
            .field("condition", &self.condition.is_some())
            .field("drop_level", &self.drop_level)
            .field("limits", &self.limits)
            .finish()
    }
}

/// Looks up `path` with no default, transform or drop policy.
pub fn get(document: &Document, path: &str) -> Result<Document, PathError> {
    Query::new(path).get(document)
}
