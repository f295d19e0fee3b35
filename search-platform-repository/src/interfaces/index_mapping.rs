//! Index mapping trait definition.

use serde_json::Value;

use search_platform_shared::{ContentProvider, IndexDocument};

/// Supplies the global index, its ingest pipeline, and the per-document
/// request bodies.
///
/// The index service never looks inside the values returned here.
pub trait IndexMapping: Send + Sync {
    /// Name of the global index.
    fn index_name(&self) -> &str;

    /// Settings and mappings used when creating the index.
    fn index_body(&self) -> Value;

    /// Identifier of the ingest pipeline.
    fn pipeline_id(&self) -> &str;

    /// Ingest pipeline definition.
    fn pipeline_body(&self) -> Value;

    /// Identifier of the document in the search index.
    fn document_id(&self, provider: &dyn ContentProvider, document: &IndexDocument) -> String;

    /// Body sent to the search engine when creating or updating the document.
    fn document_body(&self, provider: &dyn ContentProvider, document: &IndexDocument) -> Value;
}
