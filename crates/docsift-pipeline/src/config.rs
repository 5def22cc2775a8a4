//! Configuration for the DocumentPipeline.

use crate::error::SetupError;
use docsift_domain::constants::{DEFAULT_DOCUMENT_FIELD, DEFAULT_TYPE_FIELD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the DocumentPipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Field of the host document holding the raw document text.
    #[serde(default = "default_document_field")]
    pub document_field: String,

    /// Field of the host document holding the kind discriminator
    /// (`xml`/`json`).
    #[serde(default = "default_type_field")]
    pub type_field: String,

    /// Path of the base properties file defining per-kind identifier
    /// expressions and ruleset base folders. Required.
    pub properties_path: PathBuf,

    /// LRU bound for the ruleset cache. `None` means unbounded — a
    /// deliberate operator choice, not a default to reach for.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// Allow the identity to live at different paths in different documents
    /// (multi-path resolution with conflict detection).
    #[serde(default)]
    pub multipath_identity: bool,
}

fn default_document_field() -> String {
    DEFAULT_DOCUMENT_FIELD.to_string()
}

fn default_type_field() -> String {
    DEFAULT_TYPE_FIELD.to_string()
}

impl PipelineConfig {
    /// Create a configuration with default field names and the given
    /// properties file.
    pub fn new(properties_path: impl Into<PathBuf>) -> Self {
        Self {
            document_field: default_document_field(),
            type_field: default_type_field(),
            properties_path: properties_path.into(),
            cache_capacity: None,
            multipath_identity: false,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.document_field.is_empty() {
            return Err(SetupError::InvalidConfig(
                "document_field must not be empty".to_string(),
            ));
        }
        if self.type_field.is_empty() {
            return Err(SetupError::InvalidConfig(
                "type_field must not be empty".to_string(),
            ));
        }
        if self.properties_path.as_os_str().is_empty() {
            return Err(SetupError::InvalidConfig(
                "properties_path must not be empty".to_string(),
            ));
        }
        if self.cache_capacity == Some(0) {
            return Err(SetupError::InvalidConfig(
                "cache_capacity must be at least 1 when bounded".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SetupError> {
        toml::from_str(toml_str)
            .map_err(|e| SetupError::InvalidConfig(format!("failed to parse TOML: {e}")))
    }
}
