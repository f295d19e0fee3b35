//! Search error types.
//!
//! This module defines the errors a search engine client can return. The
//! index service relies on `NotFound` and `BadRequest` being distinguishable
//! from every other failure.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Failed to reach the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The addressed index, pipeline or document does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The search engine rejected the request (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-successful response.
    #[error("Request failed with status {status}: {body}")]
    RequestError { status: u16, body: String },

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a bad request error.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an error for an unexpected response status.
    pub fn request(status: u16, body: impl Into<String>) -> Self {
        Self::RequestError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Map a non-successful HTTP status and its body to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            400 => Self::BadRequest(body.into()),
            404 => Self::NotFound(body.into()),
            _ => Self::request(status, body),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }
}
