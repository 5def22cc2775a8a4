//! Docsift Path Evaluation
//!
//! Parses raw document text into an owned [`ParsedDocument`] and evaluates
//! path expressions against it: XPath 1.0 for XML documents, JSONPath
//! (RFC 9535) for JSON documents.
//!
//! # Semantics
//!
//! - A path that matches nothing yields the **empty string**, not an error.
//!   "Missing field yields empty value" holds throughout extraction, and a
//!   not-found result is indistinguishable from an empty-string match by
//!   design.
//! - A syntactically invalid expression fails with [`EvaluationError`].
//!
//! Evaluation is stateless and side-effect free; the parsed tree is never
//! mutated.

#![warn(missing_docs)]

mod document;
mod error;
mod json;
mod xml;

pub use document::ParsedDocument;
pub use error::{DocumentParseError, EvaluationError};
