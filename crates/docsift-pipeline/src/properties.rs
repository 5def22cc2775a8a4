//! Base properties file: per-kind identifier expressions and ruleset folders.

use crate::error::SetupError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Property key holding the XPath expression(s) locating an XML document's
/// identity.
pub const XML_IDENTIFIER_KEY: &str = "identifier.attribute.path.xml";

/// Property key holding the JSONPath expression(s) locating a JSON
/// document's identity.
pub const JSON_IDENTIFIER_KEY: &str = "identifier.attribute.path.json";

/// Property key holding the base folder of per-identity XML rulesets.
pub const XML_RULESET_FOLDER_KEY: &str = "config.location.xml";

/// Property key holding the base folder of per-identity JSON rulesets.
pub const JSON_RULESET_FOLDER_KEY: &str = "config.location.json";

/// The parsed base properties file.
///
/// Plain `key=value` lines; `#` and `!` lines are comments; keys and values
/// are trimmed. Loaded once at pipeline construction, where every problem is
/// fatal — without these settings the pipeline cannot run at all.
#[derive(Debug, Clone)]
pub struct BaseProperties {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl BaseProperties {
    /// Load and parse the properties file at `path`.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = fs::read_to_string(path).map_err(|source| SetupError::Properties {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    fn parse(path: &Path, text: &str) -> Result<Self, SetupError> {
        let mut entries = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            // Only the first '=' separates; values may themselves contain '='.
            let Some((key, value)) = line.split_once('=') else {
                return Err(SetupError::MalformedProperty {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: raw.to_string(),
                });
            };
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Look up an optional property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a required property, failing setup when absent.
    pub fn require(&self, key: &'static str) -> Result<&str, SetupError> {
        self.get(key).ok_or_else(|| SetupError::MissingProperty {
            key,
            path: self.path.clone(),
        })
    }
}
