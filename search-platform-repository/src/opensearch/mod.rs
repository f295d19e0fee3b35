//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend, and `IndexConfig`, the configured
//! definitions of the global index and its ingest pipeline.

mod client;
mod index_config;

pub use client::OpenSearchClient;
pub use index_config::{
    default_index_settings, default_pipeline, IndexConfig, DEFAULT_INDEX_NAME,
    DEFAULT_PIPELINE_ID,
};
