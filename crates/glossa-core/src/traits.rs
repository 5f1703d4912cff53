use crate::{catalog::Catalog, error::GlossaError, language::LanguageId};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Catalog resource: where non-default translations come from.
///
/// Implementations cover a directory of JSON files, an HTTP endpoint, or an
/// in-memory map.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// List every language this source can fetch. Called once at startup.
    async fn available(&self) -> Result<Vec<LanguageId>, GlossaError>;

    /// Fetch the catalog for `language`.
    async fn fetch(&self, language: &LanguageId) -> Result<Catalog, GlossaError>;
}

/// Language directory: display names for the selection control.
#[async_trait]
pub trait LanguageDirectory: Send + Sync {
    async fn language_names(&self) -> Result<BTreeMap<LanguageId, String>, GlossaError>;
}

/// Single-slot persistence of the selected language.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// The stored selection, if any.
    async fn selected_language(&self) -> Result<Option<LanguageId>, GlossaError>;

    /// Replace the stored selection.
    async fn set_selected_language(&self, language: &LanguageId) -> Result<(), GlossaError>;
}

/// UI surface holding elements marked with translation keys.
///
/// The surface locates its own marked elements; it receives a resolve
/// function and writes each element's resolved text.
pub trait Surface: Send + Sync {
    /// Fill the language selection control.
    fn populate_languages(&self, _languages: &[(LanguageId, String)]) {}

    /// Re-render every marked element through `resolve`.
    fn apply(&self, resolve: &dyn Fn(&str) -> String) -> Result<(), GlossaError>;

    /// Point the selection control at `language`.
    fn reflect_selection(&self, _language: &LanguageId) {}
}
