//! In-memory catalog source for embedding and tests.
//!
//! Supports injected fetch failures and per-language delays so that the
//! loader's fallback and the switch controller's ordering can be exercised
//! without I/O.

use async_trait::async_trait;
use glossa_core::{
    catalog::Catalog, error::GlossaError, language::LanguageId, traits::CatalogSource,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Catalogs held in a map.
#[derive(Default)]
pub struct MemoryCatalogSource {
    catalogs: HashMap<LanguageId, Catalog>,
    failing: HashSet<LanguageId>,
    delays: HashMap<LanguageId, Duration>,
    fetches: AtomicUsize,
}

impl MemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, language: LanguageId, catalog: Catalog) -> Self {
        self.catalogs.insert(language, catalog);
        self
    }

    /// List `language` as available but fail every fetch for it.
    pub fn with_failure(mut self, language: LanguageId) -> Self {
        self.failing.insert(language);
        self
    }

    /// Sleep for `delay` before answering a fetch for `language`.
    pub fn with_delay(mut self, language: LanguageId, delay: Duration) -> Self {
        self.delays.insert(language, delay);
        self
    }

    /// Number of `fetch` calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn available(&self) -> Result<Vec<LanguageId>, GlossaError> {
        let mut languages: Vec<_> = self
            .catalogs
            .keys()
            .chain(self.failing.iter())
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        languages.sort();
        Ok(languages)
    }

    async fn fetch(&self, language: &LanguageId) -> Result<Catalog, GlossaError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(language) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(language) {
            return Err(GlossaError::Fetch {
                language: language.clone(),
                reason: "injected failure".to_string(),
            });
        }
        self.catalogs
            .get(language)
            .cloned()
            .ok_or_else(|| GlossaError::MissingCatalog(language.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> LanguageId {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_available_includes_failing_languages() {
        let source = MemoryCatalogSource::new()
            .with_catalog(id("ja"), Catalog::empty())
            .with_failure(id("de"));
        assert_eq!(source.available().await.unwrap(), vec![id("de"), id("ja")]);
    }

    #[tokio::test]
    async fn test_fetch_counts_and_fails() {
        let ja = Catalog::from_value(json!({"a": "b"}));
        let source = MemoryCatalogSource::new()
            .with_catalog(id("ja"), ja.clone())
            .with_failure(id("de"));

        assert!(source.fetch(&id("ja")).await.unwrap().ptr_eq(&ja));
        assert!(matches!(
            source.fetch(&id("de")).await,
            Err(GlossaError::Fetch { .. })
        ));
        assert!(matches!(
            source.fetch(&id("xx")).await,
            Err(GlossaError::MissingCatalog(_))
        ));
        assert_eq!(source.fetch_count(), 3);
    }
}
