//! Error types for the search platform repository.

mod index_service_error;
mod search_error;

pub use index_service_error::IndexServiceError;
pub use search_error::SearchError;
