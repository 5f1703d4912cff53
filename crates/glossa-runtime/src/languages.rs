//! Entries for the language selection control.

use glossa_core::{language::LanguageId, traits::LanguageDirectory};
use std::collections::BTreeMap;
use tracing::warn;

/// The default language first, then every directory entry by id.
///
/// The default entry is always present; a directory name for it replaces
/// `default_name`.
pub fn merge_language_choices(
    default_language: &LanguageId,
    default_name: &str,
    mut names: BTreeMap<LanguageId, String>,
) -> Vec<(LanguageId, String)> {
    let name = names
        .remove(default_language)
        .unwrap_or_else(|| default_name.to_string());
    std::iter::once((default_language.clone(), name))
        .chain(names)
        .collect()
}

/// Read `directory` and merge it with the default entry. An unreadable
/// directory leaves only the default.
pub async fn language_choices(
    directory: &dyn LanguageDirectory,
    default_language: &LanguageId,
    default_name: &str,
) -> Vec<(LanguageId, String)> {
    let names = directory.language_names().await.unwrap_or_else(|e| {
        warn!("language directory unavailable: {e}");
        BTreeMap::new()
    });
    merge_language_choices(default_language, default_name, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_sources::StaticLanguageDirectory;

    fn id(s: &str) -> LanguageId {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_listed_first() {
        let names = BTreeMap::from([
            (id("de"), "Deutsch".to_string()),
            (id("ar"), "العربية".to_string()),
        ]);
        let choices = merge_language_choices(&id("en"), "English", names);
        let ids: Vec<_> = choices.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(ids, vec!["en", "ar", "de"]);
        assert_eq!(choices[0].1, "English");
    }

    #[test]
    fn test_directory_renames_default() {
        let names = BTreeMap::from([(id("en"), "English (US)".to_string())]);
        let choices = merge_language_choices(&id("en"), "English", names);
        assert_eq!(choices, vec![(id("en"), "English (US)".to_string())]);
    }

    #[tokio::test]
    async fn test_unreadable_directory_leaves_default() {
        let dir = glossa_sources::FsLanguageDirectory::new("/nonexistent/languages.json");
        let choices = language_choices(&dir, &id("en"), "English").await;
        assert_eq!(choices, vec![(id("en"), "English".to_string())]);

        let dir = StaticLanguageDirectory::new(BTreeMap::from([(id("ja"), "日本語".to_string())]));
        assert_eq!(language_choices(&dir, &id("en"), "English").await.len(), 2);
    }
}
