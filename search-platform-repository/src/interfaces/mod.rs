//! Interface definitions for the search platform.
//!
//! `SearchEngineClient` is the narrow capability the index service needs from
//! a remote search engine. `IndexMapping` supplies the index, pipeline and
//! document bodies, which the service treats as opaque.

mod index_mapping;
mod search_engine_client;

pub use index_mapping::IndexMapping;
pub use search_engine_client::SearchEngineClient;
