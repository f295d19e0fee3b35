//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the index-management and
//! document-ingest calls, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, mocks in tests).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::types::DocumentRequest;

/// Abstract interface for search engine operations.
///
/// Any client providing this set of operations can back the index service.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// Every method returns either the engine's JSON response or a `SearchError`.
/// Implementations must report HTTP 404 as `SearchError::NotFound` and
/// HTTP 400 as `SearchError::BadRequest`.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the index exists
    /// * `Ok(false)` - If it does not
    /// * `Err(SearchError)` - If the check could not be performed
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index with the given settings and mappings.
    async fn create_index(&self, index: &str, body: &Value) -> Result<Value, SearchError>;

    /// Delete an index.
    ///
    /// Returns `SearchError::NotFound` if the index does not exist.
    async fn delete_index(&self, index: &str) -> Result<Value, SearchError>;

    /// Create or replace an ingest pipeline.
    async fn create_pipeline(&self, pipeline_id: &str, body: &Value)
        -> Result<Value, SearchError>;

    /// Delete an ingest pipeline.
    ///
    /// Returns `SearchError::NotFound` if the pipeline does not exist.
    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<Value, SearchError>;

    /// Index a new document.
    ///
    /// If a document with the same ID already exists, it will be replaced.
    async fn create_document(&self, request: &DocumentRequest) -> Result<Value, SearchError>;

    /// Update an existing document with the fields in the request body.
    async fn update_document(&self, request: &DocumentRequest) -> Result<Value, SearchError>;

    /// Delete a document from an index.
    async fn delete_document(&self, index: &str, document_id: &str)
        -> Result<Value, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster is red
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
