//! Identifier resolution over one or more candidate path expressions.

use crate::error::IdentityError;
use docsift_domain::constants::MULTIPATH_SEPARATOR;
use docsift_path::ParsedDocument;

/// Resolve a single identity from the document.
///
/// Candidate expressions are evaluated in list order. Blank results are
/// skipped; the first non-blank result becomes the identity, and any later
/// non-blank result that disagrees fails with [`IdentityError::Conflict`] —
/// redundant locations may repeat the identity, but the resolver never
/// silently picks one of two disagreeing values. All-blank results fail with
/// [`IdentityError::NotFound`].
///
/// Pure function of (candidates, document); documents are not repeated, so
/// nothing is cached here.
pub fn resolve_identity(
    document: &ParsedDocument,
    candidates: &[String],
) -> Result<String, IdentityError> {
    let mut identity: Option<String> = None;
    for expression in candidates {
        let value = document.evaluate(expression)?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match &identity {
            Some(first) if first != value => {
                return Err(IdentityError::Conflict {
                    first: first.clone(),
                    second: value.to_string(),
                });
            }
            Some(_) => {}
            None => identity = Some(value.to_string()),
        }
    }
    identity.ok_or(IdentityError::NotFound)
}

/// Split a configured identifier property value into candidate expressions.
///
/// In multipath mode the value holds several expressions joined by the
/// literal `" |OR| "` separator; otherwise the whole value is the single
/// candidate.
pub fn split_candidates(raw: &str, multipath: bool) -> Vec<String> {
    if multipath {
        raw.split(MULTIPATH_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![raw.trim().to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_domain::Kind;

    fn json_doc(text: &str) -> ParsedDocument {
        ParsedDocument::parse(Kind::Json, text).unwrap()
    }

    #[test]
    fn test_single_path_resolves() {
        let doc = json_doc(r#"{"station": {"code": "hwh"}}"#);
        let identity =
            resolve_identity(&doc, &["$.station.code".to_string()]).unwrap();
        assert_eq!(identity, "hwh");
    }

    #[test]
    fn test_single_path_blank_is_not_found() {
        let doc = json_doc(r#"{"station": {"code": "  "}}"#);
        let err = resolve_identity(&doc, &["$.station.code".to_string()]).unwrap_err();
        assert!(matches!(err, IdentityError::NotFound));
    }

    #[test]
    fn test_multipath_agreeing_values_resolve() {
        let doc = json_doc(r#"{"station": {"code": "hwh"}, "meta": {"code": "hwh"}}"#);
        let identity = resolve_identity(
            &doc,
            &["$.station.code".to_string(), "$.meta.code".to_string()],
        )
        .unwrap();
        assert_eq!(identity, "hwh");
    }

    #[test]
    fn test_multipath_disagreement_is_conflict() {
        let doc = json_doc(r#"{"station": {"code": "hwh"}, "meta": {"code": "sdh"}}"#);
        let err = resolve_identity(
            &doc,
            &["$.station.code".to_string(), "$.meta.code".to_string()],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IdentityError::Conflict { first, second } if first == "hwh" && second == "sdh"
        ));
    }

    #[test]
    fn test_multipath_blank_candidates_are_skipped() {
        let doc = json_doc(r#"{"meta": {"code": "hwh"}}"#);
        let identity = resolve_identity(
            &doc,
            &["$.station.code".to_string(), "$.meta.code".to_string()],
        )
        .unwrap();
        assert_eq!(identity, "hwh");
    }

    #[test]
    fn test_malformed_expression_propagates() {
        let doc = json_doc(r#"{"station": {"code": "hwh"}}"#);
        let err = resolve_identity(&doc, &["$.station[".to_string()]).unwrap_err();
        assert!(matches!(err, IdentityError::Evaluation(_)));
    }

    #[test]
    fn test_split_candidates_multipath() {
        let candidates = split_candidates("$.a |OR| $.b |OR| $.c", true);
        assert_eq!(candidates, vec!["$.a", "$.b", "$.c"]);
    }

    #[test]
    fn test_split_candidates_single_path_keeps_separator_literal() {
        // Outside multipath mode the separator has no meaning.
        let candidates = split_candidates("$.a |OR| $.b", false);
        assert_eq!(candidates, vec!["$.a |OR| $.b"]);
    }
}
