//! Index status record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a document in the search index.
///
/// Transitions:
///
/// - `NotYetIndexed` -> `IndexingComplete` (create)
/// - `IndexingComplete` -> `IndexingComplete` (update)
/// - `QueuedForRemoval` -> `RemovalDone` (delete, terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStatus {
    /// The document has never been sent to the search engine.
    #[default]
    NotYetIndexed,
    /// The host asked for the document to be removed from the index.
    QueuedForRemoval,
    /// The document was created or updated in the index.
    IndexingComplete,
    /// The document was removed from the index.
    RemovalDone,
}

/// Caller-owned status record attached to an indexed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    /// Identifier of the content provider that owns the document.
    pub provider_id: String,
    /// Identifier of the document within its provider.
    pub document_id: String,
    /// Owner of the document, if the host tracks one.
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    status: IndexStatus,
    #[serde(default)]
    last_index: Option<DateTime<Utc>>,
}

impl Index {
    /// Create a record for a document that has not been indexed yet.
    pub fn new(provider_id: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            document_id: document_id.into(),
            owner_id: None,
            status: IndexStatus::NotYetIndexed,
            last_index: None,
        }
    }

    /// Set the owner of the document.
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: IndexStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> IndexStatus {
        self.status
    }

    pub fn is_status(&self, status: IndexStatus) -> bool {
        self.status == status
    }

    pub fn set_status(&mut self, status: IndexStatus) {
        self.status = status;
    }

    /// Time of the last successful create or update, if any.
    pub fn last_index(&self) -> Option<DateTime<Utc>> {
        self.last_index
    }

    /// Record the current time as the last index time.
    pub fn set_last_index(&mut self) {
        self.last_index = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index_is_not_yet_indexed() {
        let index = Index::new("files", "42");

        assert!(index.is_status(IndexStatus::NotYetIndexed));
        assert!(index.last_index().is_none());
        assert!(index.owner_id.is_none());
    }

    #[test]
    fn test_builder() {
        let index = Index::new("files", "42")
            .with_owner("alice")
            .with_status(IndexStatus::QueuedForRemoval);

        assert_eq!(index.owner_id.as_deref(), Some("alice"));
        assert_eq!(index.status(), IndexStatus::QueuedForRemoval);
    }

    #[test]
    fn test_set_last_index() {
        let mut index = Index::new("files", "42");
        let before = Utc::now();

        index.set_last_index();

        let stamped = index.last_index().unwrap();
        assert!(stamped >= before);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&IndexStatus::QueuedForRemoval).unwrap();
        assert_eq!(json, "\"queued_for_removal\"");

        let status: IndexStatus = serde_json::from_str("\"indexing_complete\"").unwrap();
        assert_eq!(status, IndexStatus::IndexingComplete);
    }

    #[test]
    fn test_deserialize_defaults_status() {
        let index: Index =
            serde_json::from_str(r#"{"provider_id":"files","document_id":"7"}"#).unwrap();

        assert_eq!(index.status(), IndexStatus::NotYetIndexed);
        assert!(index.last_index().is_none());
    }
}
