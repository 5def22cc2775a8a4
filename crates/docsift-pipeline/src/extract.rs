//! Field extraction: ruleset × parsed document → destination-field map.

use docsift_path::{EvaluationError, ParsedDocument};
use docsift_ruleset::Ruleset;
use std::collections::HashMap;

/// Destination field name → extracted values, in rule-evaluation order.
///
/// Built fresh per document and discarded after being applied.
pub type FieldValueMap = HashMap<String, Vec<String>>;

/// Evaluate every rule of `ruleset` against `document` and group the results
/// by destination field.
///
/// Empty-string results (path matched nothing) are appended like any other
/// value, preserving the ruleset's iteration order within each field. Any
/// malformed source expression aborts the whole extraction; partial field
/// maps are never applied.
pub fn extract(
    ruleset: &Ruleset,
    document: &ParsedDocument,
) -> Result<FieldValueMap, EvaluationError> {
    let mut fields: FieldValueMap = HashMap::new();
    for rule in ruleset.rules() {
        let value = document.evaluate(&rule.source)?;
        fields.entry(rule.destination.clone()).or_default().push(value);
    }
    Ok(fields)
}
