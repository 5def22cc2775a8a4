//! Docsift Pipeline
//!
//! Orchestrates per-document processing: resolve a unique identity from the
//! parsed document, locate the identity's extraction ruleset through the LRU
//! cache, evaluate every rule, and write the resulting field map back onto
//! the host document.
//!
//! # Architecture
//!
//! ```text
//! Document → kind dispatch → IdentifierResolver → RulesetCache → ExtractionEngine → write-back
//! ```
//!
//! Every failure is recoverable at document granularity: the document is
//! tagged with `_documentparsefailure`, the cause is logged, and the batch
//! continues. The one deliberate removal is the no-ruleset case: a document
//! whose identity has no (or an empty) ruleset file is dropped from the
//! output batch entirely — no rule, no destination.

#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod identity;
mod pipeline;
mod properties;


pub use config::PipelineConfig;
pub use error::{IdentityError, ProcessError, SetupError};
pub use extract::{extract, FieldValueMap};
pub use identity::{resolve_identity, split_candidates};
pub use pipeline::{Disposition, DocumentPipeline};
pub use properties::{
    BaseProperties, JSON_IDENTIFIER_KEY, JSON_RULESET_FOLDER_KEY, XML_IDENTIFIER_KEY,
    XML_RULESET_FOLDER_KEY,
};
