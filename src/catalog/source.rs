//! Catalog sources: where the ordered version list comes from

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use tracing::warn;

use crate::catalog::error::CatalogError;
use crate::catalog::manifest::{VersionCatalog, VersionsManifest};
use crate::config::{FETCH_TIMEOUT_MS, SiteConfig, USER_AGENT};

/// Trait for loading the version catalog from a site
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the ordered version catalog, oldest first
    ///
    /// # Returns
    /// * `Ok(VersionCatalog)` - Non-empty list of published versions
    /// * `Err(CatalogError)` - If the manifest is missing, malformed, or empty
    async fn fetch_catalog(&self) -> Result<VersionCatalog, CatalogError>;
}

/// Catalog source fetching the versions manifest over HTTP
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
    manifest_path: String,
}

impl HttpCatalogSource {
    /// Creates a source for `{base_url}{manifest_path}` per `config`.
    pub fn new(base_url: &str, config: &SiteConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            manifest_path: config.manifest_path.clone(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<VersionCatalog, CatalogError> {
        let url = format!("{}{}", self.base_url, self.manifest_path);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !status.is_success() {
            warn!("versions manifest returned status {}: {}", status, url);
            return Err(CatalogError::InvalidManifest(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let manifest: VersionsManifest = response.json().await.map_err(|e| {
            warn!("Failed to parse versions manifest: {}", e);
            CatalogError::InvalidManifest(e.to_string())
        })?;

        VersionCatalog::from_manifest(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_catalog_returns_versions_in_publication_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"versions": ["v1.0.0", "v1.1.0", "v2.0.0"]}"#)
            .create_async()
            .await;

        let source = HttpCatalogSource::new(&server.url(), &SiteConfig::default());
        let catalog = source.fetch_catalog().await.unwrap();

        mock.assert_async().await;
        assert_eq!(catalog.versions(), ["v1.0.0", "v1.1.0", "v2.0.0"]);
        assert_eq!(catalog.latest(), "v2.0.0");
    }

    #[tokio::test]
    async fn fetch_catalog_returns_not_found_when_manifest_is_missing() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpCatalogSource::new(&server.url(), &SiteConfig::default());
        let result = source.fetch_catalog().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn fetch_catalog_rejects_malformed_manifest() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"releases": []}"#)
            .create_async()
            .await;

        let source = HttpCatalogSource::new(&server.url(), &SiteConfig::default());
        let result = source.fetch_catalog().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CatalogError::InvalidManifest(_))));
    }

    #[tokio::test]
    async fn fetch_catalog_rejects_empty_version_list() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"versions": []}"#)
            .create_async()
            .await;

        let source = HttpCatalogSource::new(&server.url(), &SiteConfig::default());
        let result = source.fetch_catalog().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[tokio::test]
    async fn fetch_catalog_honors_configured_manifest_path() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"versions": ["v1.0.0"]}"#)
            .create_async()
            .await;

        let config = SiteConfig {
            manifest_path: "/releases.json".to_string(),
            ..SiteConfig::default()
        };
        let source = HttpCatalogSource::new(&server.url(), &config);
        let catalog = source.fetch_catalog().await.unwrap();

        mock.assert_async().await;
        assert_eq!(catalog.latest(), "v1.0.0");
    }
}
