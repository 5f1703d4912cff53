//! Static override table for chrome and navigation keys.
//!
//! Consulted before any loaded catalog. A language without its own entry
//! uses the default language's entry.

use serde_json::{json, Value};
use std::collections::HashMap;

use crate::catalog::{merge, Catalog};
use crate::language::LanguageId;

/// Per-language chrome catalogs.
#[derive(Debug, Clone)]
pub struct OverrideTable {
    default_language: LanguageId,
    tables: HashMap<LanguageId, Catalog>,
}

impl OverrideTable {
    /// An empty table. The default language gets an empty entry.
    pub fn new(default_language: LanguageId) -> Self {
        let mut tables = HashMap::new();
        tables.insert(default_language.clone(), Catalog::empty());
        Self {
            default_language,
            tables,
        }
    }

    /// The hand-authored navigation strings shipped with glossa.
    pub fn builtin(default_language: LanguageId) -> Self {
        let mut table = Self::new(default_language);
        table.extend(LanguageId::from_static("en"), builtin_english());
        table
    }

    /// Deep-merge `overlay` into the entry for `language`.
    pub fn extend(&mut self, language: LanguageId, overlay: Value) {
        let mut root = self
            .tables
            .get(&language)
            .map(|c| c.as_value().clone())
            .unwrap_or_else(|| json!({}));
        merge(&mut root, overlay);
        self.tables.insert(language, Catalog::from_value(root));
    }

    /// Entry for `language`, else the default language's entry.
    pub fn for_language(&self, language: &LanguageId) -> Option<&Catalog> {
        self.tables
            .get(language)
            .or_else(|| self.tables.get(&self.default_language))
    }

    pub fn default_language(&self) -> &LanguageId {
        &self.default_language
    }

    /// Languages with their own entry, sorted.
    pub fn languages(&self) -> Vec<&LanguageId> {
        let mut langs: Vec<_> = self.tables.keys().collect();
        langs.sort();
        langs
    }
}

impl Default for OverrideTable {
    /// The built-in table with English as the default language.
    fn default() -> Self {
        Self::builtin(LanguageId::from_static("en"))
    }
}

fn builtin_english() -> Value {
    json!({
        "nav": {
            "home": "Home",
            "settings": "Settings",
            "about": "About"
        },
        "about": {
            "title": "About"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Key;

    fn id(s: &str) -> LanguageId {
        s.parse().unwrap()
    }

    #[test]
    fn test_builtin_has_navigation_keys() {
        let table = OverrideTable::builtin(id("en"));
        let en = table.for_language(&id("en")).unwrap();
        assert_eq!(en.lookup(Key::new("nav.home")), Some("Home"));
        assert_eq!(en.lookup(Key::new("nav.settings")), Some("Settings"));
        assert_eq!(en.lookup(Key::new("nav.about")), Some("About"));
        assert_eq!(en.lookup(Key::new("about.title")), Some("About"));
    }

    #[test]
    fn test_default_is_english_builtin() {
        let table = OverrideTable::default();
        assert_eq!(table.default_language(), &id("en"));
        let entry = table.for_language(&id("ja")).unwrap();
        assert_eq!(entry.lookup(Key::new("nav.settings")), Some("Settings"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_default_entry() {
        let table = OverrideTable::builtin(id("en"));
        let fr = table.for_language(&id("fr")).unwrap();
        assert_eq!(fr.lookup(Key::new("nav.home")), Some("Home"));
    }

    #[test]
    fn test_non_english_default_always_has_entry() {
        let table = OverrideTable::builtin(id("id"));
        let entry = table.for_language(&id("fr")).unwrap();
        assert_eq!(entry.lookup(Key::new("nav.home")), None);
        assert_eq!(table.languages(), vec![&id("en"), &id("id")]);
    }

    #[test]
    fn test_extend_merges_and_adds_languages() {
        let mut table = OverrideTable::builtin(id("en"));
        table.extend(id("en"), json!({"nav": {"home": "Start"}}));
        table.extend(id("fr"), json!({"nav": {"home": "Accueil"}}));

        let en = table.for_language(&id("en")).unwrap();
        assert_eq!(en.lookup(Key::new("nav.home")), Some("Start"));
        assert_eq!(en.lookup(Key::new("nav.about")), Some("About"));

        let fr = table.for_language(&id("fr")).unwrap();
        assert_eq!(fr.lookup(Key::new("nav.home")), Some("Accueil"));
        // A language's own entry does not fall through to the default entry.
        assert_eq!(fr.lookup(Key::new("nav.about")), None);
    }
}
