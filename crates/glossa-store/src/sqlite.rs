//! SQLite-backed selection slot.

use async_trait::async_trait;
use glossa_core::{
    config::SelectionConfig, error::GlossaError, language::LanguageId, shellexpand,
    traits::SelectionStore,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{info, warn};

/// Selected language persisted in a one-row SQLite table.
#[derive(Clone)]
pub struct SqliteSelectionStore {
    pool: SqlitePool,
}

impl SqliteSelectionStore {
    /// Open (creating if needed) the database at the configured path.
    pub async fn new(config: &SelectionConfig) -> Result<Self, GlossaError> {
        let db_path = shellexpand(&config.db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GlossaError::Persist(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| GlossaError::Persist(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(opts)
            .await
            .map_err(|e| GlossaError::Persist(format!("failed to connect to sqlite: {e}")))?;

        let store = Self::from_pool(pool).await?;
        info!("Selection store initialized at {db_path}");
        Ok(store)
    }

    /// Wrap an existing pool, creating the table if missing.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, GlossaError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS selection (
                slot INTEGER PRIMARY KEY CHECK (slot = 0),
                language TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(&pool)
        .await
        .map_err(|e| GlossaError::Persist(format!("failed to create selection table: {e}")))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl SelectionStore for SqliteSelectionStore {
    async fn selected_language(&self) -> Result<Option<LanguageId>, GlossaError> {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT language FROM selection WHERE slot = 0")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| GlossaError::Persist(format!("failed to read selection: {e}")))?;

        Ok(stored.and_then(|raw| match LanguageId::parse(&raw) {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("ignoring invalid stored selection {raw:?}");
                None
            }
        }))
    }

    async fn set_selected_language(&self, language: &LanguageId) -> Result<(), GlossaError> {
        sqlx::query(
            "INSERT INTO selection (slot, language) VALUES (0, ?)
             ON CONFLICT(slot) DO UPDATE SET
                language = excluded.language,
                updated_at = datetime('now')",
        )
        .bind(language.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| GlossaError::Persist(format!("failed to write selection: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create an in-memory store for testing.
    async fn test_store() -> SqliteSelectionStore {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .unwrap();
        SqliteSelectionStore::from_pool(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_slot_reads_none() {
        let store = test_store().await;
        assert_eq!(store.selected_language().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_round_trip_overwrites_single_slot() {
        let store = test_store().await;
        for raw in ["id", "ja", "pt-BR"] {
            let lang: LanguageId = raw.parse().unwrap();
            store.set_selected_language(&lang).await.unwrap();
            assert_eq!(store.selected_language().await.unwrap(), Some(lang));
        }
        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM selection")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_invalid_stored_value_reads_none() {
        let store = test_store().await;
        sqlx::query("INSERT INTO selection (slot, language) VALUES (0, '../etc')")
            .execute(&store.pool)
            .await
            .unwrap();
        assert_eq!(store.selected_language().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_new_creates_database_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let config = SelectionConfig {
            db_path: dir.join("data/selection.db").to_string_lossy().to_string(),
        };
        let store = SqliteSelectionStore::new(&config).await.unwrap();
        store
            .set_selected_language(&"ja".parse().unwrap())
            .await
            .unwrap();
        assert!(dir.join("data/selection.db").exists());
        drop(store);
    }
}
