//! # Search Platform Repository
//!
//! This crate connects the host framework's indexing calls to a remote
//! search engine. It includes definitions for errors, the client and mapping
//! interfaces, a concrete implementation for OpenSearch, and the
//! `IndexService` that dispatches documents and reconciles their status.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;

pub use errors::{IndexServiceError, SearchError};
pub use interfaces::{IndexMapping, SearchEngineClient};
pub use self::opensearch::{IndexConfig, OpenSearchClient};
pub use service::{DocumentAction, IndexService};
pub use types::DocumentRequest;
