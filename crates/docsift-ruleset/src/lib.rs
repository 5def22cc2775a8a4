//! Docsift Ruleset Layer
//!
//! Loads per-identity extraction rulesets from small on-disk key-value files
//! and keeps them resident behind a bounded, thread-safe LRU cache so that
//! high-throughput batches do not re-read the same files over and over.
//!
//! # File format
//!
//! UTF-8 text, one rule per non-blank line:
//!
//! ```text
//! sourcePathExpression=>destinationFieldName
//! ```
//!
//! Both sides are trimmed. There is no escaping of `=>`; a line that does not
//! split into exactly two parts fails the whole file, as does a repeated
//! source expression. A missing file is **not** an error: it means "no rule
//! configured for this identity" and is reported through
//! [`Ruleset::file_existed`].

#![warn(missing_docs)]

mod cache;
mod error;
mod ruleset;

pub use cache::RulesetCache;
pub use error::RulesetError;
pub use ruleset::{Rule, Ruleset, RULE_SEPARATOR};
