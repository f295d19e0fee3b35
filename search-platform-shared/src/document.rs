//! Document payload handed over by the host framework.

use serde::{Deserialize, Serialize};

use crate::index::Index;

/// A document queued for indexing, together with its status record.
///
/// The content fields are opaque to the search platform; they are forwarded
/// to the mapping collaborator unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    /// Identifier of the document within its provider.
    pub id: String,
    /// Identifier of the content provider.
    pub provider_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Status record for this document.
    pub index: Index,
}

impl IndexDocument {
    /// Create an empty document bound to the given status record.
    pub fn new(index: Index) -> Self {
        Self {
            id: index.document_id.clone(),
            provider_id: index.provider_id.clone(),
            title: None,
            content: None,
            link: None,
            tags: Vec::new(),
            index,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexStatus;

    #[test]
    fn test_new_copies_identifiers() {
        let document = IndexDocument::new(Index::new("files", "42"))
            .with_title("Report")
            .with_tag("q3");

        assert_eq!(document.id, "42");
        assert_eq!(document.provider_id, "files");
        assert_eq!(document.title.as_deref(), Some("Report"));
        assert_eq!(document.tags, vec!["q3".to_string()]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": "42",
            "provider_id": "files",
            "index": { "provider_id": "files", "document_id": "42", "status": "queued_for_removal" }
        }"#;

        let document: IndexDocument = serde_json::from_str(json).unwrap();

        assert!(document.content.is_none());
        assert!(document.tags.is_empty());
        assert!(document.index().is_status(IndexStatus::QueuedForRemoval));
    }
}
