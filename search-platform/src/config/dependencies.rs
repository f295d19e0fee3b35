//! Dependency initialization and wiring for the search platform.

use tracing::info;

use crate::config::PlatformConfig;
use crate::IndexingError;
use search_platform_repository::{IndexService, OpenSearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Client for the remote search engine.
    pub client: Box<dyn SearchEngineClient>,
    /// Index service configured with the global index definitions.
    pub service: IndexService,
}

impl Dependencies {
    /// Initialize all dependencies from the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the configuration is invalid or the client cannot be built
    pub fn new(config: &PlatformConfig) -> Result<Self, IndexingError> {
        info!(
            opensearch_url = %config.opensearch_url,
            index = %config.index_name,
            pipeline = %config.pipeline_id,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&config.opensearch_url, config.credentials()?)
            .map_err(|e| {
                IndexingError::config(format!("Failed to create OpenSearch client: {}", e))
            })?;

        let service = IndexService::new(Box::new(config.index_config()?));

        Ok(Self {
            client: Box::new(client),
            service,
        })
    }

    /// Verify the search engine is reachable and healthy.
    pub async fn verify_connection(&self) -> Result<(), IndexingError> {
        let healthy = self
            .client
            .health_check()
            .await
            .map_err(|e| IndexingError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_platform_repository::IndexMapping;

    #[test]
    fn test_new_uses_configured_index() {
        let config = PlatformConfig::from_lookup(|key| match key {
            "SEARCH_INDEX_NAME" => Some("docs".to_string()),
            _ => None,
        });

        let dependencies = Dependencies::new(&config).unwrap();

        assert_eq!(dependencies.service.mapping().index_name(), "docs");
        assert_eq!(
            dependencies.service.mapping().pipeline_id(),
            "platform_pipeline"
        );
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = PlatformConfig::from_lookup(|key| match key {
            "OPENSEARCH_URL" => Some("not a url".to_string()),
            _ => None,
        });

        assert!(matches!(
            Dependencies::new(&config),
            Err(IndexingError::ConfigError(_))
        ));
    }
}
