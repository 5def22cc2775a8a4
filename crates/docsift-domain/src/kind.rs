//! Document format discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two document formats the pipeline knows how to process.
///
/// Determined per document from its type field; any other discriminator
/// value means the document is not ours to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// An XML document, addressed with XPath expressions.
    Xml,
    /// A JSON document, addressed with JSONPath expressions.
    Json,
}

impl Kind {
    /// Map a type-field value to a kind.
    ///
    /// Returns `None` for anything that is not exactly `"xml"` or `"json"`;
    /// such documents pass through the pipeline unmodified.
    pub fn from_discriminator(value: &str) -> Option<Self> {
        match value {
            "xml" => Some(Kind::Xml),
            "json" => Some(Kind::Json),
            _ => None,
        }
    }

    /// The discriminator string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Xml => "xml",
            Kind::Json => "json",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
