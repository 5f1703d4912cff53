//! Default value functions used by serde for config deserialization.

use crate::language::LanguageId;

pub fn default_language() -> LanguageId {
    LanguageId::from_static("en")
}

pub fn default_language_name() -> String {
    "English".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_catalog_dir() -> String {
    "locales/strings".to_string()
}

pub fn default_languages_file() -> String {
    "locales/languages.json".to_string()
}

pub fn default_timeout_secs() -> u64 {
    10
}

pub fn default_db_path() -> String {
    "~/.glossa/data/selection.db".to_string()
}
