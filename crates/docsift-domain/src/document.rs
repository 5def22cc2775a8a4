//! Duck-typed access to host documents.
//!
//! The pipeline never owns the event type of the host runtime; it only needs
//! string-field reads, field writes, and a tag-append operation. Any host
//! event satisfying [`Document`] can flow through the pipeline unchanged.

use crate::constants::TAGS_FIELD;
use crate::value::FieldValue;

/// The capability the pipeline requires of a host document/event.
pub trait Document {
    /// Read a field as a string, if present and string-typed.
    fn field(&self, name: &str) -> Option<&str>;

    /// Set a field, replacing any previous value.
    fn set_field(&mut self, name: &str, value: FieldValue);

    /// Append a tag to the document. Appending a tag it already carries is a
    /// no-op.
    fn add_tag(&mut self, tag: &str);
}

/// A JSON-object-backed [`Document`], used by the CLI and by tests.
///
/// Tags accumulate in a `tags` array field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapDocument {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl MapDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Unwrap back into a JSON object value.
    pub fn into_value(self) -> serde_json::Value {
        serde_json::Value::Object(self.fields)
    }

    /// Set a plain string field. Convenience for building documents.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(name.into(), serde_json::Value::String(value.into()));
    }

    /// The tags currently carried by this document.
    pub fn tags(&self) -> Vec<&str> {
        self.fields
            .get(TAGS_FIELD)
            .and_then(|v| v.as_array())
            .map(|tags| tags.iter().filter_map(|t| t.as_str()).collect())
            .unwrap_or_default()
    }
}

impl Document for MapDocument {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value.into());
    }

    fn add_tag(&mut self, tag: &str) {
        let tags = self
            .fields
            .entry(TAGS_FIELD.to_string())
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
        if let serde_json::Value::Array(tags) = tags {
            if !tags.iter().any(|t| t.as_str() == Some(tag)) {
                tags.push(serde_json::Value::String(tag.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_reads_only_strings() {
        let doc =
            MapDocument::from_value(serde_json::json!({ "message": "hello", "count": 3 }))
                .unwrap();
        assert_eq!(doc.field("message"), Some("hello"));
        assert_eq!(doc.field("count"), None);
        assert_eq!(doc.field("absent"), None);
    }

    #[test]
    fn test_set_field_scalar_and_list() {
        let mut doc = MapDocument::new();
        doc.set_field("name", FieldValue::Scalar("hwh".to_string()));
        doc.set_field(
            "codes",
            FieldValue::List(vec!["a".to_string(), "b".to_string()]),
        );

        let value = doc.into_value();
        assert_eq!(value["name"], serde_json::json!("hwh"));
        assert_eq!(value["codes"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_add_tag_is_idempotent() {
        let mut doc = MapDocument::new();
        doc.add_tag("_documentparsefailure");
        doc.add_tag("_documentparsefailure");
        assert_eq!(doc.tags(), vec!["_documentparsefailure"]);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(MapDocument::from_value(serde_json::json!("scalar")).is_none());
        assert!(MapDocument::from_value(serde_json::json!([1, 2])).is_none());
    }
}
