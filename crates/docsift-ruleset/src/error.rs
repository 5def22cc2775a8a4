//! Error types for ruleset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a ruleset file.
///
/// A nonexistent file is not represented here; that case loads successfully
/// with [`crate::Ruleset::file_existed`] set to `false`.
#[derive(Error, Debug)]
pub enum RulesetError {
    /// The file exists but could not be read.
    #[error("failed to read ruleset file {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly two non-empty parts on `=>`.
    #[error("malformed rule at {path}:{line}: {content:?}")]
    MalformedRule {
        /// The file containing the bad line.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },

    /// The same source expression appeared on more than one line.
    #[error("duplicate source expression {key:?} in {path}")]
    DuplicateRule {
        /// The file containing the duplicate.
        path: PathBuf,
        /// The repeated source expression.
        key: String,
    },
}
