//! Build the engine from config.

use anyhow::Context;
use glossa_core::{
    config::{Config, SourceKind},
    shellexpand,
    traits::{CatalogSource, LanguageDirectory, Surface},
};
use glossa_runtime::{language_choices, Loader, Resolver, SwitchController};
use glossa_sources::{
    FsCatalogSource, FsLanguageDirectory, HttpCatalogSource, HttpLanguageDirectory,
};
use glossa_store::SqliteSelectionStore;
use std::sync::Arc;

/// Build the configured catalog source.
pub fn build_source(cfg: &Config) -> anyhow::Result<Arc<dyn CatalogSource>> {
    let catalogs = &cfg.catalogs;
    Ok(match catalogs.source {
        SourceKind::Fs => Arc::new(FsCatalogSource::new(shellexpand(&catalogs.dir))),
        SourceKind::Http => Arc::new(HttpCatalogSource::from_config(
            &catalogs.base_url,
            catalogs.languages.clone(),
            catalogs.timeout_secs,
        )?),
    })
}

/// Build the configured language directory.
pub fn build_directory(cfg: &Config) -> anyhow::Result<Box<dyn LanguageDirectory>> {
    let catalogs = &cfg.catalogs;
    Ok(match catalogs.source {
        SourceKind::Fs => Box::new(FsLanguageDirectory::new(shellexpand(
            &catalogs.languages_file,
        ))),
        SourceKind::Http => Box::new(HttpLanguageDirectory::from_config(
            &catalogs.base_url,
            catalogs.timeout_secs,
        )?),
    })
}

/// Load the default catalog, install the global resolver, enumerate the
/// registry, and run the first load against `surface`.
pub async fn start(cfg: &Config, surface: Arc<dyn Surface>) -> anyhow::Result<SwitchController> {
    let default_language = cfg.glossa.default_language.clone();
    let overrides = cfg.override_table()?;
    let source = build_source(cfg)?;

    let default_catalog = source
        .fetch(&default_language)
        .await
        .with_context(|| format!("default catalog ({default_language}) is required"))?;

    let resolver = Resolver::new(default_language.clone(), default_catalog.clone(), overrides);
    glossa_runtime::install(resolver.clone());

    let loader = Loader::new(default_language.clone(), default_catalog, source).await;
    let selection = SqliteSelectionStore::new(&cfg.selection).await?;
    let controller =
        SwitchController::new(&resolver, Arc::new(loader), surface, Arc::new(selection))?;

    let directory = build_directory(cfg)?;
    let choices = language_choices(
        directory.as_ref(),
        &default_language,
        &cfg.glossa.default_language_name,
    )
    .await;
    controller.initialize(&choices).await;

    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_source_from_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"a": "b"}"#).unwrap();
        std::fs::write(dir.path().join("id.json"), r#"{"a": "c"}"#).unwrap();

        let mut cfg = Config::default();
        cfg.catalogs.dir = dir.path().to_string_lossy().to_string();
        let source = build_source(&cfg).unwrap();
        assert_eq!(source.name(), "fs");
        assert_eq!(source.available().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_directory_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, r#"{"id": "Bahasa Indonesia"}"#).unwrap();

        let mut cfg = Config::default();
        cfg.catalogs.languages_file = path.to_string_lossy().to_string();
        let names = build_directory(&cfg).unwrap().language_names().await.unwrap();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_http_source_from_config() {
        let mut cfg = Config::default();
        cfg.catalogs.source = SourceKind::Http;
        cfg.catalogs.base_url = "https://cdn.example.com/strings".to_string();
        assert_eq!(build_source(&cfg).unwrap().name(), "http");
        assert!(build_directory(&cfg).is_ok());
    }
}
