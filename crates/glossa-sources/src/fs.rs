//! Filesystem catalog source: one `<lang>.json` file per language.

use async_trait::async_trait;
use glossa_core::{
    catalog::Catalog, error::GlossaError, language::LanguageId, traits::CatalogSource,
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Catalogs stored as `<dir>/<lang>.json`.
pub struct FsCatalogSource {
    dir: PathBuf,
}

impl FsCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, language: &LanguageId) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }
}

#[async_trait]
impl CatalogSource for FsCatalogSource {
    fn name(&self) -> &str {
        "fs"
    }

    async fn available(&self) -> Result<Vec<LanguageId>, GlossaError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut languages = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match LanguageId::parse(stem) {
                Ok(language) => languages.push(language),
                Err(_) => warn!("skipping catalog with invalid name: {}", path.display()),
            }
        }
        languages.sort();
        debug!(
            "found {} catalog(s) in {}",
            languages.len(),
            self.dir.display()
        );
        Ok(languages)
    }

    async fn fetch(&self, language: &LanguageId) -> Result<Catalog, GlossaError> {
        let path = self.path_for(language);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| GlossaError::Fetch {
                language: language.clone(),
                reason: format!("{}: {e}", path.display()),
            })?;
        Catalog::from_json_slice(language, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::catalog::Key;

    fn id(s: &str) -> LanguageId {
        s.parse().unwrap()
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"greet": "Hi {0}"}"#).unwrap();
        std::fs::write(dir.path().join("id.json"), r#"{"greet": "Halo {0}"}"#).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a catalog").unwrap();
        std::fs::write(dir.path().join("bad name.json"), "{}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_available_lists_json_stems() {
        let dir = fixture();
        let source = FsCatalogSource::new(dir.path());
        let langs = source.available().await.unwrap();
        assert_eq!(langs, vec![id("broken"), id("en"), id("id")]);
    }

    #[tokio::test]
    async fn test_available_missing_dir_errors() {
        let source = FsCatalogSource::new("/nonexistent/glossa/strings");
        assert!(matches!(source.available().await, Err(GlossaError::Io(_))));
    }

    #[tokio::test]
    async fn test_fetch_parses_catalog() {
        let dir = fixture();
        let source = FsCatalogSource::new(dir.path());
        let catalog = source.fetch(&id("id")).await.unwrap();
        assert_eq!(catalog.lookup(Key::new("greet")), Some("Halo {0}"));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_fetch_error() {
        let dir = fixture();
        let source = FsCatalogSource::new(dir.path());
        let err = source.fetch(&id("ja")).await.unwrap_err();
        assert!(matches!(err, GlossaError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_is_parse_error() {
        let dir = fixture();
        let source = FsCatalogSource::new(dir.path());
        let err = source.fetch(&id("broken")).await.unwrap_err();
        assert!(matches!(err, GlossaError::Parse { .. }));
    }
}
