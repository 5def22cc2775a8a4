//! Fixed names of the document-processing wire contract.

/// Field written onto every document whose identity resolves successfully.
pub const IDENTITY_FIELD: &str = "doc_id";

/// Tag appended to a document when any processing step fails after type
/// dispatch.
pub const PARSE_FAILURE_TAG: &str = "_documentparsefailure";

/// Extension of per-identity ruleset files (`<identity>.conf`).
pub const RULESET_FILE_EXTENSION: &str = ".conf";

/// Literal separator between identifier expressions in multipath mode.
pub const MULTIPATH_SEPARATOR: &str = " |OR| ";

/// Default document field holding the raw document text.
pub const DEFAULT_DOCUMENT_FIELD: &str = "message";

/// Default field holding the kind discriminator.
pub const DEFAULT_TYPE_FIELD: &str = "type";

/// Field of [`crate::MapDocument`] under which failure tags accumulate.
pub const TAGS_FIELD: &str = "tags";
