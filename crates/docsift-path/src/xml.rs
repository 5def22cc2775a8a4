//! XPath evaluation over parsed XML documents.

use crate::error::EvaluationError;
use sxd_document::Package;
use sxd_xpath::{Context, Factory};

/// Evaluate an XPath 1.0 expression and take its string-value, trimmed.
///
/// An empty node-set string-values to the empty string, which is exactly the
/// not-found semantics callers rely on.
pub(crate) fn evaluate(package: &Package, expression: &str) -> Result<String, EvaluationError> {
    let factory = Factory::new();
    let xpath = factory
        .build(expression)
        .map_err(|source| EvaluationError::XPathParse {
            expression: expression.to_string(),
            source,
        })?
        .ok_or(EvaluationError::EmptyExpression)?;

    let context = Context::new();
    let document = package.as_document();
    let value = xpath
        .evaluate(&context, document.root())
        .map_err(|source| EvaluationError::XPathEvaluate {
            expression: expression.to_string(),
            source,
        })?;

    Ok(value.string().trim().to_string())
}
