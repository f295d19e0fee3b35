//! Platform settings read from the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::IndexingError;
use search_platform_repository::opensearch::{DEFAULT_INDEX_NAME, DEFAULT_PIPELINE_ID};
use search_platform_repository::IndexConfig;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Settings needed to reach the search engine and describe the global index.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformConfig {
    pub opensearch_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub index_name: String,
    pub pipeline_id: String,
    /// Path to a JSON file with the create-index body.
    pub index_settings_path: Option<PathBuf>,
    /// Path to a JSON file with the ingest pipeline definition.
    pub pipeline_definition_path: Option<PathBuf>,
}

impl PlatformConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic auth credentials
    /// - `SEARCH_INDEX_NAME`: global index name (default: platform_index)
    /// - `SEARCH_PIPELINE_ID`: ingest pipeline id (default: platform_pipeline)
    /// - `SEARCH_INDEX_SETTINGS`: path to a JSON create-index body
    /// - `SEARCH_PIPELINE_DEFINITION`: path to a JSON pipeline definition
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            opensearch_url: non_empty("OPENSEARCH_URL")
                .unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string()),
            username: non_empty("OPENSEARCH_USERNAME"),
            password: non_empty("OPENSEARCH_PASSWORD"),
            index_name: non_empty("SEARCH_INDEX_NAME")
                .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string()),
            pipeline_id: non_empty("SEARCH_PIPELINE_ID")
                .unwrap_or_else(|| DEFAULT_PIPELINE_ID.to_string()),
            index_settings_path: non_empty("SEARCH_INDEX_SETTINGS").map(PathBuf::from),
            pipeline_definition_path: non_empty("SEARCH_PIPELINE_DEFINITION").map(PathBuf::from),
        }
    }

    /// Basic auth credentials, when both halves are set.
    pub fn credentials(&self) -> Result<Option<(String, String)>, IndexingError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Some((username.clone(), password.clone()))),
            (None, None) => Ok(None),
            _ => Err(IndexingError::config(
                "OPENSEARCH_USERNAME and OPENSEARCH_PASSWORD must be set together",
            )),
        }
    }

    /// Build the index configuration, loading any configured JSON blobs.
    pub fn index_config(&self) -> Result<IndexConfig, IndexingError> {
        let mut config = IndexConfig::new(&self.index_name, &self.pipeline_id);
        if let Some(ref path) = self.index_settings_path {
            config = config.with_settings(read_json(path)?);
        }
        if let Some(ref path) = self.pipeline_definition_path {
            config = config.with_pipeline(read_json(path)?);
        }
        Ok(config)
    }
}

fn read_json(path: &Path) -> Result<Value, IndexingError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        IndexingError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| IndexingError::config(format!("Invalid JSON in {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> PlatformConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlatformConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.opensearch_url, "http://localhost:9200");
        assert_eq!(config.index_name, "platform_index");
        assert_eq!(config.pipeline_id, "platform_pipeline");
        assert!(config.credentials().unwrap().is_none());
        assert!(config.index_settings_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENSEARCH_URL", "https://search.internal:9200"),
            ("OPENSEARCH_USERNAME", "admin"),
            ("OPENSEARCH_PASSWORD", "secret"),
            ("SEARCH_INDEX_NAME", "docs"),
            ("SEARCH_PIPELINE_ID", "attachments"),
        ]);

        assert_eq!(config.opensearch_url, "https://search.internal:9200");
        assert_eq!(
            config.credentials().unwrap(),
            Some(("admin".to_string(), "secret".to_string()))
        );

        let index_config = config.index_config().unwrap();
        assert_eq!(index_config.index_name, "docs");
        assert_eq!(index_config.pipeline_id, "attachments");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("SEARCH_INDEX_NAME", "  ")]);
        assert_eq!(config.index_name, "platform_index");
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let config = config_from(&[("OPENSEARCH_USERNAME", "admin")]);
        assert!(matches!(
            config.credentials(),
            Err(IndexingError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_blob_file() {
        let config = config_from(&[("SEARCH_INDEX_SETTINGS", "/nonexistent/settings.json")]);
        assert!(matches!(
            config.index_config(),
            Err(IndexingError::ConfigError(_))
        ));
    }

    #[test]
    fn test_blob_file_loaded() {
        let path = std::env::temp_dir().join(format!("pipeline-{}.json", std::process::id()));
        fs::write(&path, r#"{"processors":[{"lowercase":{"field":"title"}}]}"#).unwrap();

        let config = config_from(&[("SEARCH_PIPELINE_DEFINITION", path.to_str().unwrap())]);
        let index_config = config.index_config().unwrap();

        assert_eq!(
            index_config.pipeline["processors"][0]["lowercase"]["field"],
            "title"
        );
        fs::remove_file(&path).unwrap();
    }
}
