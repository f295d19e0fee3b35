//! # Search Platform
//!
//! Main library for the search platform binary.
//!
//! This crate reads the platform configuration from the environment and
//! wires the OpenSearch client and the index service together.

pub mod config;

pub use config::{Dependencies, PlatformConfig};

use thiserror::Error;

/// Errors that can occur during platform initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Index service error.
    #[error("Index service error: {0}")]
    ServiceError(#[from] search_platform_repository::IndexServiceError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_platform_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
