//! JSONPath evaluation over parsed JSON documents.

use crate::error::EvaluationError;
use serde_json::Value;
use serde_json_path::JsonPath;

/// Evaluate a JSONPath expression and render the result as a string.
///
/// No match yields the empty string. A single string match yields its
/// contents verbatim; any other single match yields its JSON rendering; a
/// multi-node match renders as a JSON array.
pub(crate) fn evaluate(document: &Value, expression: &str) -> Result<String, EvaluationError> {
    let path = JsonPath::parse(expression).map_err(|source| EvaluationError::JsonPath {
        expression: expression.to_string(),
        source,
    })?;

    let nodes = path.query(document).all();
    match nodes.as_slice() {
        [] => Ok(String::new()),
        [Value::String(s)] => Ok(s.clone()),
        [single] => Ok(single.to_string()),
        many => Ok(Value::Array(many.iter().map(|v| (*v).clone()).collect()).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station() -> Value {
        json!({
            "station": {
                "name": "Howrah",
                "code": "hwh",
                "platforms": 23,
                "lines": [{"name": "main"}, {"name": "chord"}]
            }
        })
    }

    #[test]
    fn test_string_match_is_verbatim() {
        let value = evaluate(&station(), "$.station.name").unwrap();
        assert_eq!(value, "Howrah");
    }

    #[test]
    fn test_number_match_renders_as_json() {
        let value = evaluate(&station(), "$.station.platforms").unwrap();
        assert_eq!(value, "23");
    }

    #[test]
    fn test_no_match_is_empty_string() {
        let value = evaluate(&station(), "$.station.zone").unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_multiple_matches_render_as_array() {
        let value = evaluate(&station(), "$.station.lines[*].name").unwrap();
        assert_eq!(value, r#"["main","chord"]"#);
    }

    #[test]
    fn test_invalid_expression_fails() {
        let err = evaluate(&station(), "$.station[").unwrap_err();
        assert!(matches!(err, EvaluationError::JsonPath { .. }));
    }
}
