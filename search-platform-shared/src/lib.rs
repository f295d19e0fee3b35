//! # Search Platform Shared
//!
//! Types owned by the host content-search framework and handed to the
//! search platform. The platform only reads a document's status and writes
//! it back once the remote call has completed.

mod document;
mod index;
mod provider;

pub use document::IndexDocument;
pub use index::{Index, IndexStatus};
pub use provider::{ContentProvider, StaticProvider};
