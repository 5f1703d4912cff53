//! Tiered, synchronous key resolution.

use glossa_core::{
    catalog::{Catalog, Key},
    format::{substitute, Arg},
    language::LanguageId,
    overrides::OverrideTable,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::state::SharedState;

/// Read side of the resolution state.
///
/// [`Resolver::resolve`] never suspends and never mutates anything, so it is
/// safe to call from nested render callbacks. Clones share the same state.
#[derive(Debug, Clone)]
pub struct Resolver {
    default_language: LanguageId,
    default_catalog: Catalog,
    overrides: Arc<OverrideTable>,
    state: SharedState,
    writer_claimed: Arc<AtomicBool>,
}

impl Resolver {
    /// Start with `default_language` active and no catalog loaded yet.
    pub fn new(
        default_language: LanguageId,
        default_catalog: Catalog,
        overrides: OverrideTable,
    ) -> Self {
        Self {
            state: SharedState::new(default_language.clone()),
            default_language,
            default_catalog,
            overrides: Arc::new(overrides),
            writer_claimed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resolve `key` and substitute `{N}` placeholders from `args`.
    ///
    /// Tiers, first string leaf wins:
    /// 1. override table for the current language (or the default entry)
    /// 2. the active catalog, once one is loaded
    /// 3. the default catalog
    ///
    /// Returns `key` itself when no tier has it.
    pub fn resolve(&self, key: &str, args: &[Arg<'_>]) -> String {
        let key = Key::new(key);
        // Lock released before formatting: an arg's Display may resolve too.
        let found = {
            let state = self.state.read();
            self.overrides
                .for_language(state.effective_language())
                .and_then(|table| table.lookup(key))
                .or_else(|| state.catalog.as_ref().and_then(|c| c.lookup(key)))
                .or_else(|| self.default_catalog.lookup(key))
                .map(str::to_owned)
        };
        match found {
            Some(text) => substitute(&text, args),
            None => {
                debug!("no translation for {}", key.as_str());
                key.as_str().to_string()
            }
        }
    }

    /// Current language, including the target of a switch in flight.
    pub fn language(&self) -> LanguageId {
        self.state.read().effective_language().clone()
    }

    /// The committed language and its catalog.
    pub fn active(&self) -> (LanguageId, Option<Catalog>) {
        self.state.read().snapshot()
    }

    pub fn default_language(&self) -> &LanguageId {
        &self.default_language
    }

    pub fn default_catalog(&self) -> &Catalog {
        &self.default_catalog
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Hand out write access once.
    pub(crate) fn claim_writer(&self) -> Option<SharedState> {
        self.writer_claimed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| self.state.clone())
    }
}
