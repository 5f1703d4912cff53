//! The single live resolution state.

use glossa_core::{catalog::Catalog, language::LanguageId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
pub(crate) struct ResolutionState {
    /// Committed language. Only ever changed together with `catalog`.
    pub(crate) language: LanguageId,
    /// `None` until the first load completes.
    pub(crate) catalog: Option<Catalog>,
    /// Target of a switch in flight.
    pub(crate) requested: Option<LanguageId>,
}

impl ResolutionState {
    /// Language whose override entry applies. A switch in flight counts as
    /// intent, so chrome strings follow the selection immediately.
    pub(crate) fn effective_language(&self) -> &LanguageId {
        self.requested.as_ref().unwrap_or(&self.language)
    }

    pub(crate) fn snapshot(&self) -> (LanguageId, Option<Catalog>) {
        (self.language.clone(), self.catalog.clone())
    }

    pub(crate) fn commit(&mut self, language: LanguageId, catalog: Option<Catalog>) {
        self.language = language;
        self.catalog = catalog;
        self.requested = None;
    }
}

/// Shared handle. Lock guards are never held across an await point.
#[derive(Debug, Clone)]
pub(crate) struct SharedState(Arc<RwLock<ResolutionState>>);

impl SharedState {
    pub(crate) fn new(language: LanguageId) -> Self {
        Self(Arc::new(RwLock::new(ResolutionState {
            language,
            catalog: None,
            requested: None,
        })))
    }

    // Writers never panic mid-update, so a poisoned lock still holds a
    // consistent pair.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, ResolutionState> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, ResolutionState> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}
