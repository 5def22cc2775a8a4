//! Ruleset file parsing.

use crate::error::RulesetError;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// The fixed two-character delimiter between source expression and
/// destination field.
pub const RULE_SEPARATOR: &str = "=>";

/// One extraction rule: evaluate `source` against the document, append the
/// result to the `destination` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Source path expression (XPath or JSONPath, per document kind).
    pub source: String,
    /// Destination field name on the host document.
    pub destination: String,
}

/// An immutable mapping of source path expressions to destination fields for
/// one identity.
///
/// Created once by parsing a file, then shared read-only across concurrent
/// lookups. Rule order is file order, and extraction evaluates rules in that
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    rules: Vec<Rule>,
    file_existed: bool,
}

impl Ruleset {
    /// Load a ruleset from `path`.
    ///
    /// A nonexistent file yields an empty ruleset with
    /// [`file_existed`](Self::file_existed) `false`; this is a normal skip
    /// condition, not an error. Any other read failure, a malformed line, or
    /// a duplicate source expression fails the whole load: partial rulesets
    /// are never returned.
    pub fn load(path: &Path) -> Result<Self, RulesetError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "ruleset file not found");
                return Ok(Self {
                    rules: Vec::new(),
                    file_existed: false,
                });
            }
            Err(source) => {
                return Err(RulesetError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let ruleset = Self::parse(path, &text)?;
        debug!(path = %path.display(), rules = ruleset.len(), "loaded ruleset");
        Ok(ruleset)
    }

    fn parse(path: &Path, text: &str) -> Result<Self, RulesetError> {
        let mut rules = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = raw.split(RULE_SEPARATOR).collect();
            let [source, destination] = parts.as_slice() else {
                return Err(RulesetError::MalformedRule {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: raw.to_string(),
                });
            };
            let source = source.trim();
            let destination = destination.trim();
            if source.is_empty() || destination.is_empty() {
                return Err(RulesetError::MalformedRule {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }
            if !seen.insert(source.to_string()) {
                return Err(RulesetError::DuplicateRule {
                    path: path.to_path_buf(),
                    key: source.to_string(),
                });
            }
            rules.push(Rule {
                source: source.to_string(),
                destination: destination.to_string(),
            });
        }

        Ok(Self {
            rules,
            file_existed: true,
        })
    }

    /// Whether the backing file existed at load time.
    pub fn file_existed(&self) -> bool {
        self.file_existed
    }

    /// Whether the ruleset holds zero rules.
    ///
    /// True both for a present-but-empty file and for a missing one; use
    /// [`file_existed`](Self::file_existed) to tell them apart.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The rules, in file order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
