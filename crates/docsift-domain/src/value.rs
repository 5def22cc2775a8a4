//! Values written back onto documents after extraction.

use serde::{Deserialize, Serialize};

/// A value applied to a destination field.
///
/// A field that accumulated exactly one extracted value is written as a
/// scalar; a field that accumulated several is written as an ordered list.
/// Fields with zero values are never written at all, so there is no empty
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single extracted value.
    Scalar(String),
    /// Several extracted values, in rule-evaluation order.
    List(Vec<String>),
}

impl FieldValue {
    /// Build a field value from an ordered list of extracted strings.
    ///
    /// Returns `None` for an empty list: such a field must be skipped.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(FieldValue::Scalar),
            _ => Some(FieldValue::List(values)),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Scalar(s) => serde_json::Value::String(s),
            FieldValue::List(values) => serde_json::Value::Array(
                values.into_iter().map(serde_json::Value::String).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_empty_is_none() {
        assert_eq!(FieldValue::from_values(vec![]), None);
    }

    #[test]
    fn test_from_values_single_is_scalar() {
        assert_eq!(
            FieldValue::from_values(vec!["a".to_string()]),
            Some(FieldValue::Scalar("a".to_string()))
        );
    }

    #[test]
    fn test_from_values_many_keeps_order() {
        assert_eq!(
            FieldValue::from_values(vec!["a".to_string(), "b".to_string()]),
            Some(FieldValue::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_serializes_untagged() {
        let scalar = serde_json::to_value(FieldValue::Scalar("x".to_string())).unwrap();
        assert_eq!(scalar, serde_json::json!("x"));

        let list =
            serde_json::to_value(FieldValue::List(vec!["x".to_string(), "y".to_string()]))
                .unwrap();
        assert_eq!(list, serde_json::json!(["x", "y"]));
    }
}
