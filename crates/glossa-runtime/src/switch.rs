//! Transactional language switching.
//!
//! ```text
//! Idle(lang, catalog) --request_switch(new)--> Switching
//! Switching --loaded, applied, persisted--> Idle(new, new_catalog)
//! Switching --apply or persist failed-----> Idle(lang, catalog)
//! Switching --newer request started-------> (result dropped)
//! ```
//!
//! Each request takes a generation number. Only the latest generation may
//! commit, persist or roll back, so neither a slow fetch nor a slow write can
//! overwrite the result of a switch requested after it. Writes to the
//! selection store are serialized and the generation is checked again while
//! holding the write lock.

use glossa_core::{
    error::GlossaError,
    language::LanguageId,
    traits::{SelectionStore, Surface},
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::loader::Loader;
use crate::resolver::Resolver;
use crate::state::SharedState;

/// Controller state as seen from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle(LanguageId),
    Switching { from: LanguageId, to: LanguageId },
}

/// How a [`SwitchController::request_switch`] ended.
#[derive(Debug)]
pub enum SwitchOutcome {
    /// The new language is active and persisted.
    Applied(LanguageId),
    /// Apply or persist failed; the previous language and catalog are back.
    RolledBack {
        attempted: LanguageId,
        restored: LanguageId,
        error: GlossaError,
    },
    /// A newer request started before this one finished.
    Superseded(LanguageId),
}

impl SwitchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Sole writer of the resolution state.
pub struct SwitchController {
    resolver: Resolver,
    state: SharedState,
    loader: Arc<Loader>,
    surface: Arc<dyn Surface>,
    selection: Arc<dyn SelectionStore>,
    generation: AtomicU64,
    persist_lock: Mutex<()>,
}

impl SwitchController {
    /// Take write access to `resolver`'s state. Fails if another controller
    /// already holds it.
    pub fn new(
        resolver: &Resolver,
        loader: Arc<Loader>,
        surface: Arc<dyn Surface>,
        selection: Arc<dyn SelectionStore>,
    ) -> Result<Self, GlossaError> {
        let state = resolver.claim_writer().ok_or_else(|| {
            GlossaError::Config("resolution state already has a switch controller".to_string())
        })?;
        Ok(Self {
            resolver: resolver.clone(),
            state,
            loader,
            surface,
            selection,
            generation: AtomicU64::new(0),
            persist_lock: Mutex::new(()),
        })
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn phase(&self) -> Phase {
        let state = self.state.read();
        match &state.requested {
            Some(to) => Phase::Switching {
                from: state.language.clone(),
                to: to.clone(),
            },
            None => Phase::Idle(state.language.clone()),
        }
    }

    /// First load at startup.
    ///
    /// Fills the selection control with `languages`, activates the persisted
    /// selection (or the default language), loads its catalog, and renders
    /// the surface. Returns the language that ended up active.
    pub async fn initialize(&self, languages: &[(LanguageId, String)]) -> LanguageId {
        self.surface.populate_languages(languages);

        let selected = match self.selection.selected_language().await {
            Ok(Some(language)) => language,
            Ok(None) => self.resolver.default_language().clone(),
            Err(e) => {
                warn!("could not read selected language: {e}");
                self.resolver.default_language().clone()
            }
        };

        let generation = self.next_generation();
        self.state.write().commit(selected.clone(), None);
        self.surface.reflect_selection(&selected);

        let catalog = self.loader.load(&selected).await;
        if !self.is_latest(generation) {
            debug!("initial load of {selected} superseded by a switch");
            return self.resolver.language();
        }
        self.state.write().commit(selected.clone(), Some(catalog));

        if let Err(e) = self.apply() {
            error!("initial render failed: {e}");
        }
        info!("active language: {selected}");
        selected
    }

    /// Switch to `language`: load, apply, persist. On an apply or persist
    /// failure the previous pair is restored and the selection control is
    /// pointed back at it. A request overtaken by a newer one at any step
    /// returns [`SwitchOutcome::Superseded`] and neither persists nor rolls
    /// back.
    pub async fn request_switch(&self, language: LanguageId) -> SwitchOutcome {
        let generation = self.next_generation();
        let (previous, previous_catalog) = {
            let mut state = self.state.write();
            let snapshot = state.snapshot();
            state.requested = Some(language.clone());
            snapshot
        };
        info!("switching language {previous} -> {language}");

        let catalog = self.loader.load(&language).await;
        if !self.is_latest(generation) {
            debug!("dropping stale switch to {language}");
            return SwitchOutcome::Superseded(language);
        }
        self.state.write().commit(language.clone(), Some(catalog));

        let result = match self.apply() {
            Ok(()) => {
                let _guard = self.persist_lock.lock().await;
                if !self.is_latest(generation) {
                    debug!("switch to {language} superseded before persisting");
                    return SwitchOutcome::Superseded(language);
                }
                self.selection.set_selected_language(&language).await
            }
            Err(e) => Err(e),
        };

        if !self.is_latest(generation) {
            // A newer switch owns the state now; it persists after us.
            debug!("switch to {language} superseded while persisting");
            return SwitchOutcome::Superseded(language);
        }

        match result {
            Ok(()) => {
                info!("language switched to {language}");
                SwitchOutcome::Applied(language)
            }
            Err(e) => {
                self.state
                    .write()
                    .commit(previous.clone(), previous_catalog);
                self.surface.reflect_selection(&previous);
                if let Err(render_err) = self.apply() {
                    warn!("re-render after rollback failed: {render_err}");
                }
                error!("switch to {language} failed, reverted to {previous}: {e}");
                SwitchOutcome::RolledBack {
                    attempted: language,
                    restored: previous,
                    error: e,
                }
            }
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn apply(&self) -> Result<(), GlossaError> {
        self.surface
            .apply(&|key: &str| self.resolver.resolve(key, &[]))
    }
}
