//! Index service implementation.
//!
//! This module forwards index lifecycle and document calls from the host
//! framework to the search engine, and writes the outcome back into the
//! caller's status record.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{IndexServiceError, SearchError};
use crate::interfaces::{IndexMapping, SearchEngineClient};
use crate::types::DocumentRequest;
use search_platform_shared::{ContentProvider, Index, IndexDocument, IndexStatus};

const CONFIGURATION_HINT: &str = "Check your user/password and the index assigned to that cloud";

/// The remote operation selected for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    Create,
    Update,
    Remove,
}

impl DocumentAction {
    /// Pick the operation for a status. Removal takes precedence over update;
    /// everything else is created.
    pub fn for_status(status: IndexStatus) -> Self {
        match status {
            IndexStatus::QueuedForRemoval => Self::Remove,
            IndexStatus::IndexingComplete => Self::Update,
            IndexStatus::NotYetIndexed | IndexStatus::RemovalDone => Self::Create,
        }
    }
}

/// Forwards indexing calls to a `SearchEngineClient`.
///
/// The service holds only the mapping collaborator. Clients, providers and
/// documents are borrowed for the duration of a call.
pub struct IndexService {
    mapping: Box<dyn IndexMapping>,
}

impl IndexService {
    /// Create a new IndexService backed by the given mapping.
    pub fn new(mapping: Box<dyn IndexMapping>) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &dyn IndexMapping {
        self.mapping.as_ref()
    }

    /// Make sure the global index and its ingest pipeline exist.
    ///
    /// Nothing is created when the index already exists. A bad request from
    /// the search engine is reported as `IndexServiceError::Configuration`;
    /// any other failure is returned as is.
    #[instrument(skip_all, fields(index = %self.mapping.index_name()))]
    pub async fn initialize_index(
        &self,
        client: &dyn SearchEngineClient,
    ) -> Result<(), IndexServiceError> {
        self.create_index_if_missing(client)
            .await
            .map_err(|e| match e {
                SearchError::BadRequest(_) => IndexServiceError::configuration(CONFIGURATION_HINT),
                other => IndexServiceError::Search(other),
            })
    }

    async fn create_index_if_missing(
        &self,
        client: &dyn SearchEngineClient,
    ) -> Result<(), SearchError> {
        let index_name = self.mapping.index_name();
        if client.index_exists(index_name).await? {
            debug!("Index already exists");
            return Ok(());
        }

        client
            .create_index(index_name, &self.mapping.index_body())
            .await?;
        client
            .create_pipeline(self.mapping.pipeline_id(), &self.mapping.pipeline_body())
            .await?;

        Ok(())
    }

    /// Delete the ingest pipeline, then the global index.
    ///
    /// Either one being absent is not an error.
    #[instrument(skip_all, fields(index = %self.mapping.index_name()))]
    pub async fn remove_index(
        &self,
        client: &dyn SearchEngineClient,
    ) -> Result<(), IndexServiceError> {
        ignore_not_found(client.delete_pipeline(self.mapping.pipeline_id()).await)?;
        ignore_not_found(client.delete_index(self.mapping.index_name()).await)?;
        Ok(())
    }

    /// Send a document to the search engine.
    ///
    /// The operation is chosen from the document's status (see
    /// `DocumentAction::for_status`) and exactly one remote call is made.
    /// The raw response is returned to the caller.
    #[instrument(skip_all, fields(provider = %provider.id(), document = %document.id))]
    pub async fn index_document(
        &self,
        client: &dyn SearchEngineClient,
        provider: &dyn ContentProvider,
        document: &IndexDocument,
    ) -> Result<Value, IndexServiceError> {
        let index_name = self.mapping.index_name();
        let document_id = self.mapping.document_id(provider, document);
        let action = DocumentAction::for_status(document.index().status());
        debug!(?action, doc_id = %document_id, "Dispatching document");

        let result = match action {
            DocumentAction::Remove => client.delete_document(index_name, &document_id).await?,
            DocumentAction::Update => {
                client
                    .update_document(&self.document_request(provider, document, document_id))
                    .await?
            }
            DocumentAction::Create => {
                client
                    .create_document(&self.document_request(provider, document, document_id))
                    .await?
            }
        };

        Ok(result)
    }

    fn document_request(
        &self,
        provider: &dyn ContentProvider,
        document: &IndexDocument,
        document_id: String,
    ) -> DocumentRequest {
        DocumentRequest::new(
            self.mapping.index_name(),
            document_id,
            self.mapping.document_body(provider, document),
        )
        .with_pipeline(self.mapping.pipeline_id())
    }

    /// Record the outcome of `index_document` in the status record.
    ///
    /// A queued removal becomes `RemovalDone`. Anything else is stamped with
    /// the current time and becomes `IndexingComplete`.
    pub fn parse_index_result(&self, index: &mut Index, _result: &Value) {
        if index.is_status(IndexStatus::QueuedForRemoval) {
            index.set_status(IndexStatus::RemovalDone);
            return;
        }

        // TODO: inspect the response body (e.g. `result`, `_shards.failed`) once
        // the host framework defines how partial failures should be reported.
        index.set_last_index();
        index.set_status(IndexStatus::IndexingComplete);
    }

    /// Dispatch a document and update its status record from the outcome.
    ///
    /// The status is left untouched when the remote call fails.
    pub async fn index_and_reconcile(
        &self,
        client: &dyn SearchEngineClient,
        provider: &dyn ContentProvider,
        document: &mut IndexDocument,
    ) -> Result<Value, IndexServiceError> {
        let result = self.index_document(client, provider, document).await?;
        self.parse_index_result(document.index_mut(), &result);
        Ok(result)
    }
}

fn ignore_not_found(result: Result<Value, SearchError>) -> Result<(), SearchError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
