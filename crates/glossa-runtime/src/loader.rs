//! Lazy catalog loading with fallback to the default catalog.

use glossa_core::{
    catalog::Catalog, error::GlossaError, language::LanguageId, traits::CatalogSource,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Fetches non-default catalogs on demand. Never fails: every miss or error
/// resolves to the default catalog.
pub struct Loader {
    default_language: LanguageId,
    default_catalog: Catalog,
    registry: BTreeSet<LanguageId>,
    source: Arc<dyn CatalogSource>,
}

impl Loader {
    /// Enumerate `source` once to build the registry. The default language is
    /// excluded; it is always resident. An enumeration failure leaves the
    /// registry empty.
    pub async fn new(
        default_language: LanguageId,
        default_catalog: Catalog,
        source: Arc<dyn CatalogSource>,
    ) -> Self {
        let registry = match source.available().await {
            Ok(languages) => languages
                .into_iter()
                .filter(|l| *l != default_language)
                .collect(),
            Err(e) => {
                warn!("{} source: failed to enumerate catalogs: {e}", source.name());
                BTreeSet::new()
            }
        };
        info!(
            "{} source: {} lazily loadable catalog(s)",
            source.name(),
            registry.len()
        );
        Self {
            default_language,
            default_catalog,
            registry,
            source,
        }
    }

    /// Languages with a registered catalog, default excluded.
    pub fn registry(&self) -> &BTreeSet<LanguageId> {
        &self.registry
    }

    pub fn is_registered(&self, language: &LanguageId) -> bool {
        *language == self.default_language || self.registry.contains(language)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Catalog for `language`, or the default catalog when there is none.
    pub async fn load(&self, language: &LanguageId) -> Catalog {
        if *language == self.default_language {
            return self.default_catalog.clone();
        }

        if !self.registry.contains(language) {
            let e = GlossaError::MissingCatalog(language.clone());
            warn!("{e}, falling back to {}", self.default_language);
            return self.default_catalog.clone();
        }

        match self.source.fetch(language).await {
            Ok(catalog) => {
                debug!("loaded {language} catalog ({} strings)", catalog.leaf_count());
                catalog
            }
            Err(e) => {
                error!("{e}, falling back to {}", self.default_language);
                self.default_catalog.clone()
            }
        }
    }
}
