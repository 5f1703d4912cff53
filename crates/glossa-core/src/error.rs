use thiserror::Error;

use crate::language::LanguageId;

/// Top-level error type for glossa.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// A language identifier failed validation.
    #[error("invalid language id: {0:?}")]
    InvalidLanguage(String),

    /// No catalog resource is registered for the language.
    #[error("no catalog registered for {0}")]
    MissingCatalog(LanguageId),

    /// Network or filesystem failure while fetching a catalog.
    #[error("failed to fetch catalog for {language}: {reason}")]
    Fetch { language: LanguageId, reason: String },

    /// A fetched catalog was not a nested string mapping.
    #[error("failed to parse catalog for {language}: {reason}")]
    Parse { language: LanguageId, reason: String },

    /// Pushing resolved strings into the UI failed.
    #[error("apply error: {0}")]
    Apply(String),

    /// Reading or writing the selected language failed.
    #[error("persist error: {0}")]
    Persist(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
