mod defaults;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::GlossaError;
use crate::language::LanguageId;
use crate::overrides::OverrideTable;
use defaults::*;

/// Top-level glossa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub glossa: GlossaConfig,
    #[serde(default)]
    pub catalogs: CatalogConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Extra override entries: `[overrides.<lang>.<section>]` tables merged
    /// over the built-in table.
    #[serde(default)]
    pub overrides: BTreeMap<String, toml::Table>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaConfig {
    /// Language of the resident catalog, the terminal fallback.
    #[serde(default = "default_language")]
    pub default_language: LanguageId,
    /// Display name always listed for the default language.
    #[serde(default = "default_language_name")]
    pub default_language_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlossaConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_language_name: default_language_name(),
            log_level: default_log_level(),
        }
    }
}

/// Where catalogs are fetched from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `<dir>/<lang>.json` on the local filesystem (default).
    #[default]
    Fs,
    /// `<base_url>/<lang>.json` over HTTP.
    Http,
}

impl SourceKind {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Fs => "fs",
            Self::Http => "http",
        }
    }
}

/// Catalog source config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// Directory holding one JSON catalog per language.
    #[serde(default = "default_catalog_dir")]
    pub dir: String,
    /// JSON object mapping language id to display name.
    #[serde(default = "default_languages_file")]
    pub languages_file: String,
    /// Base URL for the HTTP source.
    #[serde(default)]
    pub base_url: String,
    /// Languages served by the HTTP source. HTTP has no directory listing,
    /// so the registry comes from here.
    #[serde(default)]
    pub languages: Vec<LanguageId>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            dir: default_catalog_dir(),
            languages_file: default_languages_file(),
            base_url: String::new(),
            languages: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Selection persistence config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Config {
    /// Built-in override table with the configured `[overrides]` merged in.
    pub fn override_table(&self) -> Result<OverrideTable, GlossaError> {
        let mut table = OverrideTable::builtin(self.glossa.default_language.clone());
        for (lang, entries) in &self.overrides {
            let language = LanguageId::parse(lang)
                .map_err(|e| GlossaError::Config(format!("overrides: {e}")))?;
            let value = serde_json::to_value(entries)?;
            table.extend(language, value);
        }
        Ok(table)
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, GlossaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GlossaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| GlossaError::Config(format!("failed to parse config: {}", e)))?;

    if config.catalogs.source == SourceKind::Http && config.catalogs.base_url.is_empty() {
        return Err(GlossaError::Config(
            "catalogs.source is \"http\" but catalogs.base_url is empty".to_string(),
        ));
    }

    Ok(config)
}
