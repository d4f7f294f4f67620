//! The document model the path engine walks over.
//!
//! A [`Document`] mirrors `serde_json::Value` with one addition: a
//! [`Document::Drop`] marker a mapping layer can store at a location to ask
//! for that location (or one of its ancestors) to be tombstoned later.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::drop_level::DropLevel;

/// A nested, JSON-like value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    /// The absence sentinel. Tombstones are written as `Null`.
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Document>),
    Mapping(BTreeMap<String, Document>),
    /// A marker asking for deletion of this location or an ancestor.
    Drop(DropLevel),
}

impl Document {
    /// An empty mapping.
    pub fn mapping() -> Self {
        Document::Mapping(BTreeMap::new())
    }

    /// Returns true for the absence sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Truthiness: null, false, zero, and empty strings or containers are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Document::Null => false,
            Document::Bool(b) => *b,
            Document::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Document::String(s) => !s.is_empty(),
            Document::Sequence(items) => !items.is_empty(),
            Document::Mapping(map) => !map.is_empty(),
            Document::Drop(_) => true,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Document::Sequence(_))
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Document>> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut BTreeMap<String, Document>> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Document>> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_drop_level(&self) -> Option<DropLevel> {
        match self {
            Document::Drop(level) => Some(*level),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "bool",
            Document::Number(_) => "number",
            Document::String(_) => "string",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
            Document::Drop(_) => "drop marker",
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                Document::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<Document> for Value {
    /// Drop markers have no JSON form and serialize as `null`.
    fn from(doc: Document) -> Self {
        match doc {
            Document::Null | Document::Drop(_) => Value::Null,
            Document::Bool(b) => Value::Bool(b),
            Document::Number(n) => Value::Number(n),
            Document::String(s) => Value::String(s),
            Document::Sequence(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            Document::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<DropLevel> for Document {
    fn from(level: DropLevel) -> Self {
        Document::Drop(level)
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::String(s.to_string())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::String(s)
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Document::Bool(b)
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Document::Number(n.into())
    }
}

impl From<u64> for Document {
    fn from(n: u64) -> Self {
        Document::Number(n.into())
    }
}

impl From<usize> for Document {
    fn from(n: usize) -> Self {
        Document::Number((n as u64).into())
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Document::Sequence(items)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Document::from)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Drop(level) => write!(f, "{}", level),
            other => write!(f, "{}", Value::from(other.clone())),
        }
    }
}

/// Recursively strips `null`, `""`, `[]` and `{}` out of mappings and sequences.
///
/// Containers that only held empty values are removed as well. A top-level
/// value that ends up empty is returned as the empty container of its kind.
pub fn remove_empty_values(doc: Document) -> Document {
    match doc {
        Document::Mapping(map) => Document::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, remove_empty_values(v)))
                .filter(|(_, v)| !is_empty_value(v))
                .collect(),
        ),
        Document::Sequence(items) => Document::Sequence(
            items
                .into_iter()
                .map(remove_empty_values)
                .filter(|v| !is_empty_value(v))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty_value(doc: &Document) -> bool {
    match doc {
        Document::Null => true,
        Document::String(s) => s.is_empty(),
        Document::Sequence(items) => items.is_empty(),
        Document::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::from(value)
    }

    #[test]
    fn test_truthiness() {
        assert!(!Document::Null.is_truthy());
        assert!(!doc(json!(0)).is_truthy());
        assert!(!doc(json!(0.0)).is_truthy());
        assert!(!doc(json!("")).is_truthy());
        assert!(!doc(json!([])).is_truthy());
        assert!(!doc(json!({})).is_truthy());
        assert!(!doc(json!(false)).is_truthy());
        assert!(doc(json!(-3)).is_truthy());
        assert!(doc(json!("x")).is_truthy());
        assert!(doc(json!([null])).is_truthy());
        assert!(Document::Drop(DropLevel::THIS_OBJECT).is_truthy());
    }

    #[test]
    fn test_json_conversion_preserves_structure() {
        let value = json!({"a": [1, "two", {"b": null}], "c": true});
        assert_eq!(Value::from(doc(value.clone())), value);
    }

    #[test]
    fn test_drop_marker_serializes_as_null() {
        let mut map = BTreeMap::new();
        map.insert("gone".to_string(), Document::Drop(DropLevel::PARENT));
        let out = serde_json::to_value(Document::Mapping(map)).unwrap();
        assert_eq!(out, json!({"gone": null}));
    }

    #[test]
    fn test_deserialize_from_str() {
        let parsed: Document = serde_json::from_str(r#"{"k": [1, 2]}"#).unwrap();
        assert_eq!(parsed, doc(json!({"k": [1, 2]})));
    }

    #[test]
    fn test_remove_empty_values() {
        let cases = vec![
            (json!([[]]), json!([])),
            (json!(["a", [], null]), json!(["a"])),
            (json!({"empty_list": [], "empty_dict": {}}), json!({})),
            (json!({"empty_list": [], "empty_dict": {}, "a": "b"}), json!({"a": "b"})),
            (
                json!({"empty_list": [{}, {}, {}], "empty_dict": {"someKey": {}}}),
                json!({}),
            ),
            (json!([{}, ["", null], [{"empty": {"dict": {"key": null}}}]]), json!([])),
        ];
        for (input, expected) in cases {
            assert_eq!(remove_empty_values(doc(input)), doc(expected));
        }
    }

    #[test]
    fn test_remove_empty_values_keeps_falsy_scalars() {
        let input = doc(json!({"zero": 0, "no": false, "drop": null}));
        assert_eq!(remove_empty_values(input), doc(json!({"zero": 0, "no": false})));
    }
}
