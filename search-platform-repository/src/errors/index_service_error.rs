//! Index service error types.

use thiserror::Error;

use super::SearchError;

/// Errors returned by the index service.
///
/// Remote failures are passed through as `Search` without reclassification.
/// `Configuration` is only produced when the search engine rejects index or
/// pipeline creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexServiceError {
    /// The search engine refused to set up the index or pipeline.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

impl IndexServiceError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
