//! Language type: validated language code backed by the registry.
//!
//! A `LanguageCode` can only be obtained from a registry entry, so holding one
//! is proof the code is supported. Unknown strings are normalized to the
//! default at the boundary (`get_language_from_locale`) and never propagated.

use crate::error::I18nError;
use crate::i18n::{LanguageMetadata, LanguageRegistry};
use crate::rtl::{get_direction, Direction};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, supported language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode {
    code: &'static str,
}

impl LanguageCode {
    pub const EN_US: LanguageCode = LanguageCode { code: "en-US" };
    pub const DE_DE: LanguageCode = LanguageCode { code: "de-DE" };

    /// Create a LanguageCode from a code string.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code is a key of the registry
    /// * `Err(I18nError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<LanguageCode, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|meta| LanguageCode { code: meta.code })
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))
    }

    /// The registry's default language.
    pub fn default_language() -> LanguageCode {
        LanguageCode {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// All supported languages in registry order.
    pub fn all() -> Vec<LanguageCode> {
        LanguageRegistry::get()
            .codes()
            .into_iter()
            .map(|code| LanguageCode { code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the registry entry for this language.
    ///
    /// # Panics
    /// Never in practice: a `LanguageCode` is only built from registry codes.
    pub fn metadata(&self) -> &'static LanguageMetadata {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("LanguageCode is always backed by a registry entry")
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    pub fn native_name(&self) -> &'static str {
        self.metadata().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.metadata().flag
    }

    pub fn is_default(&self) -> bool {
        self.metadata().is_default
    }

    /// Text direction derived from the code with the built-in RTL families.
    pub fn direction(&self) -> Direction {
        get_direction(self.code)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageCode::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

/// True iff `code` is a key of the language registry.
pub fn is_valid_language(code: &str) -> bool {
    LanguageRegistry::get().contains(code)
}

/// Normalize an optional locale to a supported language.
///
/// Returns the locale itself when it is registered, the default language
/// otherwise. Never fails.
pub fn get_language_from_locale(locale: Option<&str>) -> LanguageCode {
    locale
        .and_then(|code| LanguageCode::from_code(code).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_registry() {
        assert_eq!(LanguageCode::EN_US, LanguageCode::from_code("en-US").unwrap());
        assert_eq!(LanguageCode::DE_DE, LanguageCode::from_code("de-DE").unwrap());
    }

    #[test]
    fn test_from_code_invalid() {
        let result = LanguageCode::from_code("fr-FR");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(LanguageCode::from_code("").is_err());
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::EN_US);
        assert!(LanguageCode::EN_US.is_default());
        assert!(!LanguageCode::DE_DE.is_default());
    }

    #[test]
    fn test_metadata_access() {
        assert_eq!(LanguageCode::DE_DE.name(), "German");
        assert_eq!(LanguageCode::DE_DE.native_name(), "Deutsch");
        assert_eq!(LanguageCode::DE_DE.flag(), "🇩🇪");
    }

    #[test]
    fn test_is_valid_language() {
        assert!(is_valid_language("en-US"));
        assert!(is_valid_language("de-DE"));
        assert!(!is_valid_language("en"));
        assert!(!is_valid_language("ar-AE"));
    }

    #[test]
    fn test_get_language_from_locale() {
        assert_eq!(get_language_from_locale(Some("de-DE")), LanguageCode::DE_DE);
        assert_eq!(get_language_from_locale(Some("fr-FR")), LanguageCode::EN_US);
        assert_eq!(get_language_from_locale(Some("")), LanguageCode::EN_US);
        assert_eq!(get_language_from_locale(None), LanguageCode::EN_US);
    }

    #[test]
    fn test_supported_languages_are_ltr() {
        for language in LanguageCode::all() {
            assert_eq!(language.direction(), Direction::Ltr);
        }
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&LanguageCode::DE_DE).unwrap();
        assert_eq!(json, "\"de-DE\"");

        let parsed: LanguageCode = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(parsed, LanguageCode::EN_US);

        assert!(serde_json::from_str::<LanguageCode>("\"xx-XX\"").is_err());
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(LanguageCode::DE_DE.to_string(), "de-DE");
        assert_eq!("de-DE".parse::<LanguageCode>().unwrap(), LanguageCode::DE_DE);
    }
}
