//! HTTP catalog source: `GET <base_url>/<lang>.json`.

use async_trait::async_trait;
use glossa_core::{
    catalog::Catalog, error::GlossaError, language::LanguageId, traits::CatalogSource,
};
use std::time::Duration;
use tracing::debug;

/// Catalogs served over HTTP. The registry is configured, not discovered.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
    languages: Vec<LanguageId>,
}

impl HttpCatalogSource {
    /// Create from config values.
    pub fn from_config(
        base_url: &str,
        languages: Vec<LanguageId>,
        timeout_secs: u64,
    ) -> Result<Self, GlossaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GlossaError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            languages,
        })
    }

    fn url_for(&self, language: &LanguageId) -> String {
        format!("{}/{language}.json", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn available(&self) -> Result<Vec<LanguageId>, GlossaError> {
        Ok(self.languages.clone())
    }

    async fn fetch(&self, language: &LanguageId) -> Result<Catalog, GlossaError> {
        let url = self.url_for(language);
        debug!("fetching catalog {url}");
        let fetch_err = |e: reqwest::Error| GlossaError::Fetch {
            language: language.clone(),
            reason: e.to_string(),
        };
        let bytes = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?
            .bytes()
            .await
            .map_err(fetch_err)?;
        Catalog::from_json_slice(language, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let source =
            HttpCatalogSource::from_config("https://cdn.example.com/strings/", vec![], 5).unwrap();
        assert_eq!(
            source.url_for(&"pt-BR".parse().unwrap()),
            "https://cdn.example.com/strings/pt-BR.json"
        );
    }

    #[tokio::test]
    async fn test_available_is_configured_list() {
        let langs: Vec<LanguageId> = vec!["en".parse().unwrap(), "ja".parse().unwrap()];
        let source = HttpCatalogSource::from_config("http://localhost", langs.clone(), 5).unwrap();
        assert_eq!(source.available().await.unwrap(), langs);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let source = HttpCatalogSource::from_config("http://127.0.0.1:9", vec![], 2).unwrap();
        let err = source.fetch(&"en".parse().unwrap()).await.unwrap_err();
        assert!(matches!(err, GlossaError::Fetch { .. }));
    }
}
