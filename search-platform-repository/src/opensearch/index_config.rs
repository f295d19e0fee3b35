//! Global index configuration.
//!
//! This module holds the names and bodies of the global index and its
//! ingest pipeline. The bodies are configuration blobs: they are loaded by
//! the caller and sent to the search engine unchanged.

use serde_json::{json, Map, Value};

use crate::interfaces::IndexMapping;
use search_platform_shared::{ContentProvider, IndexDocument};

/// Default name of the global index.
pub const DEFAULT_INDEX_NAME: &str = "platform_index";

/// Default identifier of the ingest pipeline.
pub const DEFAULT_PIPELINE_ID: &str = "platform_pipeline";

/// Index and pipeline definitions for the global search index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Name of the index.
    pub index_name: String,
    /// Identifier of the ingest pipeline.
    pub pipeline_id: String,
    /// Body sent with the create-index request.
    pub settings: Value,
    /// Body sent with the put-pipeline request.
    pub pipeline: Value,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME, DEFAULT_PIPELINE_ID)
    }
}

impl IndexConfig {
    /// Create a configuration with default index settings and an empty pipeline.
    pub fn new(index_name: impl Into<String>, pipeline_id: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            pipeline_id: pipeline_id.into(),
            settings: default_index_settings(),
            pipeline: default_pipeline(),
        }
    }

    /// Replace the create-index body.
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the pipeline definition.
    pub fn with_pipeline(mut self, pipeline: Value) -> Self {
        self.pipeline = pipeline;
        self
    }
}

impl IndexMapping for IndexConfig {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    fn index_body(&self) -> Value {
        self.settings.clone()
    }

    fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    fn pipeline_body(&self) -> Value {
        self.pipeline.clone()
    }

    /// Uses format: `{provider_id}:{document_id}` so that documents from
    /// different providers never collide in the global index.
    fn document_id(&self, provider: &dyn ContentProvider, document: &IndexDocument) -> String {
        format!("{}:{}", provider.id(), document.id)
    }

    fn document_body(&self, provider: &dyn ContentProvider, document: &IndexDocument) -> Value {
        let mut doc = Map::new();
        doc.insert("provider".to_string(), json!(provider.id()));
        doc.insert("id".to_string(), json!(document.id));
        if let Some(ref owner) = document.index().owner_id {
            doc.insert("owner".to_string(), json!(owner));
        }
        if let Some(ref title) = document.title {
            doc.insert("title".to_string(), json!(title));
        }
        if let Some(ref content) = document.content {
            doc.insert("content".to_string(), json!(content));
        }
        if let Some(ref link) = document.link {
            doc.insert("link".to_string(), json!(link));
        }
        if !document.tags.is_empty() {
            doc.insert("tags".to_string(), json!(document.tags));
        }
        Value::Object(doc)
    }
}

/// Settings used when no index definition is configured.
pub fn default_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        }
    })
}

/// Pipeline used when no pipeline definition is configured.
pub fn default_pipeline() -> Value {
    json!({
        "description": "Search platform ingest pipeline",
        "processors": []
    })
}
