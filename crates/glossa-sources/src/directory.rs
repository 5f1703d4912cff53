//! Language directories: display names for the selection control.

use async_trait::async_trait;
use glossa_core::{error::GlossaError, language::LanguageId, traits::LanguageDirectory};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Parse `{"<lang>": "<display name>", ...}`. Entries with an invalid id or
/// a non-string name are skipped.
pub fn parse_language_names(bytes: &[u8]) -> Result<BTreeMap<LanguageId, String>, GlossaError> {
    let root: Value = serde_json::from_slice(bytes)?;
    let Value::Object(map) = root else {
        return Err(GlossaError::Config(
            "language directory is not a JSON object".to_string(),
        ));
    };
    let mut names = BTreeMap::new();
    for (raw, name) in map {
        match (LanguageId::parse(&raw), name.as_str()) {
            (Ok(id), Some(name)) => {
                names.insert(id, name.to_string());
            }
            _ => warn!("skipping language directory entry {raw:?}"),
        }
    }
    Ok(names)
}

/// Directory read from a JSON file.
pub struct FsLanguageDirectory {
    path: PathBuf,
}

impl FsLanguageDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LanguageDirectory for FsLanguageDirectory {
    async fn language_names(&self) -> Result<BTreeMap<LanguageId, String>, GlossaError> {
        let bytes = tokio::fs::read(&self.path).await?;
        parse_language_names(&bytes)
    }
}

/// Directory fetched from `<base_url>/languages.json`.
pub struct HttpLanguageDirectory {
    client: reqwest::Client,
    url: String,
}

impl HttpLanguageDirectory {
    pub fn from_config(base_url: &str, timeout_secs: u64) -> Result<Self, GlossaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GlossaError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            url: format!("{}/languages.json", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl LanguageDirectory for HttpLanguageDirectory {
    async fn language_names(&self) -> Result<BTreeMap<LanguageId, String>, GlossaError> {
        let bytes = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| GlossaError::Config(format!("language directory: {e}")))?
            .bytes()
            .await
            .map_err(|e| GlossaError::Config(format!("language directory: {e}")))?;
        parse_language_names(&bytes)
    }
}

/// Fixed directory.
#[derive(Default)]
pub struct StaticLanguageDirectory {
    names: BTreeMap<LanguageId, String>,
}

impl StaticLanguageDirectory {
    pub fn new(names: BTreeMap<LanguageId, String>) -> Self {
        Self { names }
    }
}

#[async_trait]
impl LanguageDirectory for StaticLanguageDirectory {
    async fn language_names(&self) -> Result<BTreeMap<LanguageId, String>, GlossaError> {
        Ok(self.names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_bad_entries() {
        let raw = r#"{"id": "Bahasa Indonesia", "ja": "日本語", "x y": "Bad", "de": 5}"#;
        let names = parse_language_names(raw.as_bytes()).unwrap();
        let keys: Vec<_> = names.keys().map(LanguageId::as_str).collect();
        assert_eq!(keys, vec!["id", "ja"]);
        assert_eq!(names[&"ja".parse::<LanguageId>().unwrap()], "日本語");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse_language_names(b"[]").is_err());
        assert!(matches!(
            parse_language_names(b"{"),
            Err(GlossaError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_fs_directory_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, r#"{"id": "Bahasa Indonesia"}"#).unwrap();
        let names = FsLanguageDirectory::new(&path).language_names().await.unwrap();
        assert_eq!(names.len(), 1);
    }

    #[tokio::test]
    async fn test_fs_directory_missing_file_errors() {
        let dir = FsLanguageDirectory::new("/nonexistent/languages.json");
        assert!(matches!(dir.language_names().await, Err(GlossaError::Io(_))));
    }
}
