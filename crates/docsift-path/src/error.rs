//! Error types for document parsing and path evaluation.

use thiserror::Error;

/// Errors raised while parsing raw document text.
#[derive(Error, Debug)]
pub enum DocumentParseError {
    /// The raw text is not well-formed JSON.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The raw text is not well-formed XML.
    #[error("invalid XML document: {0}")]
    Xml(#[from] sxd_document::parser::Error),
}

/// Errors raised while evaluating a path expression.
///
/// Every variant means the expression itself is unusable; a path that simply
/// matches nothing is not an error.
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// The JSONPath expression could not be compiled.
    #[error("invalid JSONPath expression {expression:?}: {source}")]
    JsonPath {
        /// The offending expression.
        expression: String,
        /// The underlying parse failure.
        #[source]
        source: serde_json_path::ParseError,
    },

    /// The XPath expression could not be compiled.
    #[error("invalid XPath expression {expression:?}: {source}")]
    XPathParse {
        /// The offending expression.
        expression: String,
        /// The underlying parse failure.
        #[source]
        source: sxd_xpath::ParserError,
    },

    /// The XPath expression compiled but failed during evaluation.
    #[error("XPath expression {expression:?} failed to evaluate: {source}")]
    XPathEvaluate {
        /// The offending expression.
        expression: String,
        /// The underlying execution failure.
        #[source]
        source: sxd_xpath::ExecutionError,
    },

    /// The XPath expression was empty.
    #[error("empty XPath expression")]
    EmptyExpression,
}
