//! The per-document orchestrator.

use crate::config::PipelineConfig;
use crate::error::{ProcessError, SetupError};
use crate::extract::{extract, FieldValueMap};
use crate::identity::{resolve_identity, split_candidates};
use crate::properties::{
    BaseProperties, JSON_IDENTIFIER_KEY, JSON_RULESET_FOLDER_KEY, XML_IDENTIFIER_KEY,
    XML_RULESET_FOLDER_KEY,
};
use docsift_domain::constants::{IDENTITY_FIELD, PARSE_FAILURE_TAG, RULESET_FILE_EXTENSION};
use docsift_domain::{Document, FieldValue, Kind};
use docsift_path::ParsedDocument;
use docsift_ruleset::RulesetCache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// What the batch should do with a document after processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep the document in the output batch (possibly tagged).
    Keep,
    /// Remove the document from the output batch: its identity has no
    /// configured ruleset, so it has no destination.
    Remove,
}

struct PipelineInner {
    document_field: String,
    type_field: String,
    xml_identifier_paths: Vec<String>,
    json_identifier_paths: Vec<String>,
    xml_ruleset_dir: PathBuf,
    json_ruleset_dir: PathBuf,
    cache: RulesetCache,
}

/// Drives each document through identity resolution, ruleset lookup, and
/// field extraction.
///
/// Cheaply cloneable; clones share the ruleset cache, which is the only
/// shared mutable state in the system.
#[derive(Clone)]
pub struct DocumentPipeline {
    inner: Arc<PipelineInner>,
}

impl std::fmt::Debug for DocumentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPipeline").finish_non_exhaustive()
    }
}

impl DocumentPipeline {
    /// Build a pipeline from `config`.
    ///
    /// Loads the base properties file and prepares the per-kind identifier
    /// expression lists; any problem here is fatal, since the pipeline
    /// cannot run without them.
    pub fn new(config: PipelineConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let properties = BaseProperties::load(&config.properties_path)?;

        let xml_identifier_paths = split_candidates(
            properties.require(XML_IDENTIFIER_KEY)?,
            config.multipath_identity,
        );
        let json_identifier_paths = split_candidates(
            properties.require(JSON_IDENTIFIER_KEY)?,
            config.multipath_identity,
        );
        let xml_ruleset_dir = PathBuf::from(properties.require(XML_RULESET_FOLDER_KEY)?);
        let json_ruleset_dir = PathBuf::from(properties.require(JSON_RULESET_FOLDER_KEY)?);

        info!(
            document_field = %config.document_field,
            type_field = %config.type_field,
            properties_path = %config.properties_path.display(),
            cache_capacity = ?config.cache_capacity,
            multipath_identity = config.multipath_identity,
            "document pipeline ready"
        );

        Ok(Self {
            inner: Arc::new(PipelineInner {
                document_field: config.document_field,
                type_field: config.type_field,
                xml_identifier_paths,
                json_identifier_paths,
                xml_ruleset_dir,
                json_ruleset_dir,
                cache: RulesetCache::new(config.cache_capacity),
            }),
        })
    }

    /// Process one document in place.
    ///
    /// Documents without a recognized kind discriminator, or without a
    /// string-typed document field, pass through unmodified. Any processing
    /// failure tags the document with `_documentparsefailure` and keeps it;
    /// only the no-ruleset case returns [`Disposition::Remove`].
    pub fn process_document<D: Document>(&self, document: &mut D) -> Disposition {
        let Some(kind) = document
            .field(&self.inner.type_field)
            .and_then(Kind::from_discriminator)
        else {
            return Disposition::Keep;
        };
        let Some(raw) = document.field(&self.inner.document_field) else {
            return Disposition::Keep;
        };
        let raw = raw.to_string();

        match self.run(kind, &raw, document) {
            Ok(disposition) => disposition,
            Err(e) => {
                error!(kind = %kind, error = %e, "failed to process document");
                document.add_tag(PARSE_FAILURE_TAG);
                Disposition::Keep
            }
        }
    }

    fn run<D: Document>(
        &self,
        kind: Kind,
        raw: &str,
        document: &mut D,
    ) -> Result<Disposition, ProcessError> {
        let parsed = ParsedDocument::parse(kind, raw)?;
        let identity = resolve_identity(&parsed, self.identifier_paths(kind))?;

        // The identity goes onto the document before ruleset lookup, so even
        // removed or extraction-failed documents carry it.
        document.set_field(IDENTITY_FIELD, FieldValue::Scalar(identity.clone()));

        let ruleset_path = self
            .ruleset_dir(kind)
            .join(format!("{identity}{RULESET_FILE_EXTENSION}"));
        let ruleset = self.inner.cache.get_or_load(&ruleset_path)?;

        if !ruleset.file_existed() || ruleset.is_empty() {
            info!(
                identity = %identity,
                "no ruleset configured; document will not be sent to any output"
            );
            return Ok(Disposition::Remove);
        }

        let fields = extract(&ruleset, &parsed)?;
        apply_fields(document, fields);
        Ok(Disposition::Keep)
    }

    /// Process a whole batch, one blocking worker per document.
    ///
    /// Document order among survivors is preserved; there is no ordering
    /// requirement between documents, and the ruleset cache is the only
    /// point of contention between workers.
    pub async fn process_batch<D>(&self, batch: Vec<D>) -> Vec<D>
    where
        D: Document + Send + 'static,
    {
        let mut handles = Vec::with_capacity(batch.len());
        for mut document in batch {
            let pipeline = self.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let disposition = pipeline.process_document(&mut document);
                (document, disposition)
            }));
        }

        let mut survivors = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok((document, Disposition::Keep)) => survivors.push(document),
                Ok((_, Disposition::Remove)) => {}
                Err(e) => error!(error = %e, "document worker failed"),
            }
        }
        survivors
    }

    fn identifier_paths(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Xml => &self.inner.xml_identifier_paths,
            Kind::Json => &self.inner.json_identifier_paths,
        }
    }

    fn ruleset_dir(&self, kind: Kind) -> &Path {
        match kind {
            Kind::Xml => &self.inner.xml_ruleset_dir,
            Kind::Json => &self.inner.json_ruleset_dir,
        }
    }
}

/// Write an extracted field map onto the document.
///
/// One value ⇒ scalar, several ⇒ ordered list, zero ⇒ the field is skipped
/// entirely.
fn apply_fields<D: Document>(document: &mut D, fields: FieldValueMap) {
    for (field, values) in fields {
        if let Some(value) = FieldValue::from_values(values) {
            document.set_field(&field, value);
        }
    }
}
