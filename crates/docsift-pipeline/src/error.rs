//! Error types for pipeline construction and per-document processing.

use docsift_path::{DocumentParseError, EvaluationError};
use docsift_ruleset::RulesetError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal construction-time failures.
///
/// Raised only while building the pipeline (base properties file,
/// configuration validation); once construction succeeds, no error aborts
/// batch processing.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The base properties file could not be read.
    #[error("failed to read properties file {path}: {source}")]
    Properties {
        /// The properties file path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A properties line was not `key=value`.
    #[error("malformed property at {path}:{line}: {content:?}")]
    MalformedProperty {
        /// The properties file path.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A required property key was absent.
    #[error("missing required property {key:?} in {path}")]
    MissingProperty {
        /// The absent key.
        key: &'static str,
        /// The properties file path.
        path: PathBuf,
    },

    /// The pipeline configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Identity-resolution failures.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Every candidate expression evaluated blank.
    #[error("could not find the document identity")]
    NotFound,

    /// Two candidate expressions produced different non-blank identities.
    #[error("identity expressions disagree: first found {first:?}, then {second:?}")]
    Conflict {
        /// The first non-blank identity seen.
        first: String,
        /// The later, disagreeing identity.
        second: String,
    },

    /// A candidate expression was malformed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Any per-document processing failure after type dispatch.
///
/// All variants are handled identically by the pipeline: tag the document,
/// log the cause, keep going.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The raw document text did not parse for its kind.
    #[error("failed to parse document: {0}")]
    Parse(#[from] DocumentParseError),

    /// Identity resolution failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The identity's ruleset file failed to load.
    #[error(transparent)]
    Ruleset(#[from] RulesetError),

    /// A rule's source expression was malformed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
