//! Defines the registry and built-in implementations for named transforms.
use crate::error::TransformError;
use dotwalk_types::Document;
use serde_json::Number;
use std::collections::HashMap;
use std::sync::Arc;

/// A post-processing step applied to a resolved value.
pub type Transform = Arc<dyn Fn(Document) -> Result<Document, TransformError> + Send + Sync>;

/// A registry of named transforms, looked up case-insensitively.
#[derive(Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, Transform>,
}

impl TransformRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Registers a transform under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, transform: F)
    where
        F: Fn(Document) -> Result<Document, TransformError> + Send + Sync + 'static,
    {
        self.transforms
            .insert(name.to_lowercase(), Arc::new(transform));
    }

    /// Finds a transform by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<Transform, TransformError> {
        self.transforms
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| TransformError::Unknown(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// --- Helpers ---

fn mismatch(transform: &str, expected: &'static str, found: &Document) -> TransformError {
    TransformError::TypeMismatch {
        transform: transform.to_string(),
        expected,
        found: found.kind(),
    }
}

fn map_str(
    transform: &'static str,
    value: Document,
    f: impl FnOnce(&str) -> String,
) -> Result<Document, TransformError> {
    match value.as_str() {
        Some(s) => Ok(Document::String(f(s))),
        None => Err(mismatch(transform, "string", &value)),
    }
}

// --- Built-in Transform Implementations ---

fn upper(value: Document) -> Result<Document, TransformError> {
    map_str("upper", value, str::to_uppercase)
}

fn lower(value: Document) -> Result<Document, TransformError> {
    map_str("lower", value, str::to_lowercase)
}

fn trim(value: Document) -> Result<Document, TransformError> {
    map_str("trim", value, |s| s.trim().to_string())
}

fn first(value: Document) -> Result<Document, TransformError> {
    match value {
        Document::Sequence(items) => Ok(items.into_iter().next().unwrap_or_default()),
        other => Err(mismatch("first", "sequence", &other)),
    }
}

fn last(value: Document) -> Result<Document, TransformError> {
    match value {
        Document::Sequence(items) => Ok(items.into_iter().last().unwrap_or_default()),
        other => Err(mismatch("last", "sequence", &other)),
    }
}

fn len(value: Document) -> Result<Document, TransformError> {
    match &value {
        Document::String(s) => Ok(Document::from(s.chars().count())),
        Document::Sequence(items) => Ok(Document::from(items.len())),
        Document::Mapping(map) => Ok(Document::from(map.len())),
        other => Err(mismatch("len", "string, sequence or mapping", other)),
    }
}

fn string(value: Document) -> Result<Document, TransformError> {
    match value {
        Document::String(_) => Ok(value),
        other => Ok(Document::String(other.to_string())),
    }
}

fn number(value: Document) -> Result<Document, TransformError> {
    let text = match value {
        Document::Number(n) => return Ok(Document::Number(n)),
        Document::String(s) => s,
        other => return Err(mismatch("number", "string or number", &other)),
    };
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Ok(Document::from(n));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Document::Number)
        .ok_or_else(|| TransformError::Failed {
            transform: "number".to_string(),
            message: format!("'{}' is not a number", text),
        })
}

fn keys(value: Document) -> Result<Document, TransformError> {
    match value {
        Document::Mapping(map) => Ok(Document::Sequence(
            map.into_keys().map(Document::String).collect(),
        )),
        other => Err(mismatch("keys", "mapping", &other)),
    }
}

impl Default for TransformRegistry {
    /// Creates a new registry populated with all built-in transforms.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("upper", upper);
        registry.register("lower", lower);
        registry.register("trim", trim);
        registry.register("first", first);
        registry.register("last", last);
        registry.register("len", len);
        registry.register("string", string);
        registry.register("number", number);
        registry.register("keys", keys);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn apply(name: &str, value: Value) -> Result<Value, TransformError> {
        let registry = TransformRegistry::default();
        let transform = registry.get(name)?;
        transform(Document::from(value)).map(Value::from)
    }

    #[test]
    fn test_string_transforms() {
        assert_eq!(apply("upper", json!("abc")), Ok(json!("ABC")));
        assert_eq!(apply("LOWER", json!("AbC")), Ok(json!("abc")));
        assert_eq!(apply("trim", json!("  x ")), Ok(json!("x")));
    }

    #[test]
    fn test_string_transform_rejects_numbers() {
        assert_eq!(
            apply("upper", json!(3)),
            Err(TransformError::TypeMismatch {
                transform: "upper".into(),
                expected: "string",
                found: "number",
            })
        );
    }

    #[test]
    fn test_sequence_transforms() {
        assert_eq!(apply("first", json!([1, 2, 3])), Ok(json!(1)));
        assert_eq!(apply("last", json!([1, 2, 3])), Ok(json!(3)));
        assert_eq!(apply("first", json!([])), Ok(json!(null)));
        assert_eq!(apply("len", json!([1, 2, 3])), Ok(json!(3)));
        assert_eq!(apply("len", json!("héllo")), Ok(json!(5)));
    }

    #[test]
    fn test_number_and_string_coercion() {
        assert_eq!(apply("number", json!(" 42 ")), Ok(json!(42)));
        assert_eq!(apply("number", json!("2.5")), Ok(json!(2.5)));
        assert!(matches!(apply("number", json!("abc")), Err(TransformError::Failed { .. })));
        assert_eq!(apply("string", json!(12)), Ok(json!("12")));
        assert_eq!(apply("string", json!({"a": 1})), Ok(json!("{\"a\":1}")));
    }

    #[test]
    fn test_keys_are_sorted() {
        assert_eq!(apply("keys", json!({"b": 1, "a": 2})), Ok(json!(["a", "b"])));
    }

    #[test]
    fn test_unknown_transform() {
        assert_eq!(apply("nope", json!(1)), Err(TransformError::Unknown("nope".into())));
        assert!(TransformRegistry::default().names().contains(&"upper"));
    }
}
