//! Owned parsed representation of one input document.

use crate::error::{DocumentParseError, EvaluationError};
use crate::{json, xml};
use docsift_domain::Kind;

/// One parsed input document, tagged with its kind.
///
/// Owns the parsed tree for the lifetime of a single processing pass; the
/// tree is read through [`ParsedDocument::evaluate`] and never mutated.
pub enum ParsedDocument {
    /// A parsed JSON document.
    Json(serde_json::Value),
    /// A parsed XML document.
    Xml(sxd_document::Package),
}

impl std::fmt::Debug for ParsedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedDocument::Json(value) => f.debug_tuple("Json").field(value).finish(),
            ParsedDocument::Xml(_) => f.debug_tuple("Xml").finish_non_exhaustive(),
        }
    }
}

impl ParsedDocument {
    /// Parse raw document text for the given kind.
    pub fn parse(kind: Kind, text: &str) -> Result<Self, DocumentParseError> {
        match kind {
            Kind::Json => Ok(ParsedDocument::Json(serde_json::from_str(text)?)),
            Kind::Xml => Ok(ParsedDocument::Xml(sxd_document::parser::parse(text)?)),
        }
    }

    /// The kind this document was parsed as.
    pub fn kind(&self) -> Kind {
        match self {
            ParsedDocument::Json(_) => Kind::Json,
            ParsedDocument::Xml(_) => Kind::Xml,
        }
    }

    /// Evaluate a path expression against this document.
    ///
    /// The expression syntax follows the document's kind: JSONPath for JSON,
    /// XPath for XML. A non-matching path yields the empty string.
    pub fn evaluate(&self, expression: &str) -> Result<String, EvaluationError> {
        match self {
            ParsedDocument::Json(value) => json::evaluate(value, expression),
            ParsedDocument::Xml(package) => xml::evaluate(package, expression),
        }
    }
}
