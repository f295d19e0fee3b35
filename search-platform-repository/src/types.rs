//! Request types for document operations.

use serde_json::Value;

/// Request to create or update a single document.
///
/// The body is forwarded to the search engine as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    /// Target index.
    pub index: String,
    /// Document identifier within the index.
    pub document_id: String,
    /// Ingest pipeline to run the document through, if any.
    pub pipeline: Option<String>,
    /// Document source.
    pub body: Value,
}

impl DocumentRequest {
    /// Create a request without an ingest pipeline.
    pub fn new(index: impl Into<String>, document_id: impl Into<String>, body: Value) -> Self {
        Self {
            index: index.into(),
            document_id: document_id.into(),
            pipeline: None,
            body,
        }
    }

    /// Route the document through an ingest pipeline.
    pub fn with_pipeline(mut self, pipeline: impl Into<String>) -> Self {
        self.pipeline = Some(pipeline.into());
        self
    }
}
