//! Language identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::GlossaError;

/// Longest identifier accepted (covers tags like `zh-Hant-TW`).
const MAX_LEN: usize = 35;

/// Opaque short identifier selecting a translation set, e.g. `en` or `pt-BR`.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted, so an id can double as
/// a file stem or URL segment without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageId(String);

impl LanguageId {
    /// Validate and wrap an identifier. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, GlossaError> {
        let id = raw.trim();
        let valid = !id.is_empty()
            && id.len() <= MAX_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(GlossaError::InvalidLanguage(raw.to_string()))
        }
    }

    /// Wrap a literal already known to be valid.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageId {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageId {
    type Error = GlossaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageId> for String {
    fn from(id: LanguageId) -> Self {
        id.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LanguageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_locale_tags() {
        for raw in ["en", "pt-BR", "zh_Hant", " id "] {
            let id = LanguageId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw.trim());
        }
    }

    #[test]
    fn test_parse_rejects_paths_and_blanks() {
        for raw in ["", "   ", "../en", "en/us", "en.json", "a b"] {
            assert!(
                matches!(LanguageId::parse(raw), Err(GlossaError::InvalidLanguage(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: LanguageId = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(ok.to_string(), "de");
        assert!(serde_json::from_str::<LanguageId>("\"../etc\"").is_err());
    }
}
