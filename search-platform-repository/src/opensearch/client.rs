//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cluster::ClusterHealthParts,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    ingest::{IngestDeletePipelineParts, IngestPutPipelineParts},
    DeleteParts, IndexParts, OpenSearch, UpdateParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::types::DocumentRequest;

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200", None)?;
/// let exists = client.index_exists("platform_index").await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `credentials` - Optional `(username, password)` for basic auth
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str, credentials: Option<(String, String)>) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        let authenticated = credentials.is_some();
        if let Some((username, password)) = credentials {
            builder = builder.auth(Credentials::Basic(username, password));
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(url = %url, authenticated, "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Turn a response into its JSON body, or a `SearchError` for any
    /// non-successful status.
    async fn read_response(response: Response, operation: &str) -> Result<Value, SearchError> {
        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = SearchError::from_status(status.as_u16(), body);
            if err.is_not_found() {
                debug!(operation, "Resource not found");
            } else {
                error!(operation, status = %status, error = %err, "Request failed");
            }
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self))]
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(SearchError::from_status(status, body))
            }
        }
    }

    #[instrument(skip(self, body))]
    async fn create_index(&self, index: &str, body: &Value) -> Result<Value, SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "create_index").await?;
        info!(index = %index, "Created index");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete_index(&self, index: &str) -> Result<Value, SearchError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "delete_index").await?;
        info!(index = %index, "Deleted index");
        Ok(result)
    }

    #[instrument(skip(self, body))]
    async fn create_pipeline(
        &self,
        pipeline_id: &str,
        body: &Value,
    ) -> Result<Value, SearchError> {
        let response = self
            .client
            .ingest()
            .put_pipeline(IngestPutPipelineParts::Id(pipeline_id))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "create_pipeline").await?;
        info!(pipeline_id = %pipeline_id, "Created ingest pipeline");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<Value, SearchError> {
        let response = self
            .client
            .ingest()
            .delete_pipeline(IngestDeletePipelineParts::Id(pipeline_id))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "delete_pipeline").await?;
        info!(pipeline_id = %pipeline_id, "Deleted ingest pipeline");
        Ok(result)
    }

    #[instrument(skip(self, request), fields(index = %request.index, doc_id = %request.document_id))]
    async fn create_document(&self, request: &DocumentRequest) -> Result<Value, SearchError> {
        let mut builder = self
            .client
            .index(IndexParts::IndexId(&request.index, &request.document_id));
        if let Some(ref pipeline) = request.pipeline {
            builder = builder.pipeline(pipeline);
        }

        let response = builder
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "create_document").await?;
        debug!("Document indexed");
        Ok(result)
    }

    #[instrument(skip(self, request), fields(index = %request.index, doc_id = %request.document_id))]
    async fn update_document(&self, request: &DocumentRequest) -> Result<Value, SearchError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(&request.index, &request.document_id))
            .body(json!({ "doc": request.body }))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "update_document").await?;
        debug!("Document updated");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, index: &str, document_id: &str) -> Result<Value, SearchError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(index, document_id))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let result = Self::read_response(response, "delete_document").await?;
        debug!("Document deleted");
        Ok(result)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let body = Self::read_response(response, "health_check").await?;
        Ok(is_healthy(&body))
    }
}

/// A cluster is usable while its status is green or yellow.
fn is_healthy(health: &Value) -> bool {
    matches!(health["status"].as_str(), Some("green") | Some("yellow"))
}
