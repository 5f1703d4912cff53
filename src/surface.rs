//! Console surface: marked elements rendered as `element: text` lines.

use glossa_core::{error::GlossaError, language::LanguageId, traits::Surface};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// An element and the translation key it is marked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub element: String,
    pub key: String,
}

/// Parse `element = key` lines. Blank lines and `#` comments are skipped.
pub fn parse_markers(text: &str) -> Result<Vec<Marker>, GlossaError> {
    let mut markers = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parsed = line
            .split_once('=')
            .map(|(element, key)| (element.trim(), key.trim()))
            .filter(|(element, key)| !element.is_empty() && !key.is_empty());
        match parsed {
            Some((element, key)) => markers.push(Marker {
                element: element.to_string(),
                key: key.to_string(),
            }),
            None => {
                return Err(GlossaError::Config(format!(
                    "markers line {}: expected `element = key`, got {line:?}",
                    n + 1
                )))
            }
        }
    }
    Ok(markers)
}

/// Writes every marked element to `out` on each apply.
pub struct ConsoleSurface<W> {
    markers: Vec<Marker>,
    out: Mutex<W>,
    muted: AtomicBool,
    languages: Mutex<Vec<(LanguageId, String)>>,
    selected: Mutex<Option<LanguageId>>,
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(markers: Vec<Marker>, out: W) -> Self {
        Self {
            markers,
            out: Mutex::new(out),
            muted: AtomicBool::new(false),
            languages: Mutex::new(Vec::new()),
            selected: Mutex::new(None),
        }
    }

    /// While muted, applies succeed without writing anything.
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
    }

    /// Entries of the selection control.
    pub fn languages(&self) -> Vec<(LanguageId, String)> {
        self.languages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// What the selection control currently shows.
    pub fn selected(&self) -> Option<LanguageId> {
        self.selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn populate_languages(&self, languages: &[(LanguageId, String)]) {
        *self.languages.lock().unwrap_or_else(PoisonError::into_inner) = languages.to_vec();
    }

    fn apply(&self, resolve: &dyn Fn(&str) -> String) -> Result<(), GlossaError> {
        if self.markers.is_empty() || self.muted.load(Ordering::SeqCst) {
            return Ok(());
        }
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for marker in &self.markers {
            writeln!(out, "{}: {}", marker.element, resolve(&marker.key))
                .map_err(|e| GlossaError::Apply(format!("{}: {e}", marker.element)))?;
        }
        out.flush()
            .map_err(|e| GlossaError::Apply(format!("flush: {e}")))
    }

    fn reflect_selection(&self, language: &LanguageId) {
        debug!("selection control -> {language}");
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner) = Some(language.clone());
    }
}
