//! In-memory selection slot.

use async_trait::async_trait;
use glossa_core::{error::GlossaError, language::LanguageId, traits::SelectionStore};
use tokio::sync::Mutex;

/// Selection kept for the lifetime of the process only.
#[derive(Default)]
pub struct MemorySelectionStore {
    slot: Mutex<Option<LanguageId>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `language` already selected.
    pub fn with_selection(language: LanguageId) -> Self {
        Self {
            slot: Mutex::new(Some(language)),
        }
    }
}

#[async_trait]
impl SelectionStore for MemorySelectionStore {
    async fn selected_language(&self) -> Result<Option<LanguageId>, GlossaError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn set_selected_language(&self, language: &LanguageId) -> Result<(), GlossaError> {
        *self.slot.lock().await = Some(language.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemorySelectionStore::new();
        assert_eq!(store.selected_language().await.unwrap(), None);
        let ja: LanguageId = "ja".parse().unwrap();
        store.set_selected_language(&ja).await.unwrap();
        assert_eq!(store.selected_language().await.unwrap(), Some(ja));
    }
}
