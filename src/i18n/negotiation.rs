//! Language resolution: stored preference, then Accept-Language, then default.
//!
//! The stored preference lives behind [`PreferenceStore`] so the same
//! resolution runs against a request's cookies on the server and against an
//! in-memory store in tests.

use crate::error::I18nError;
use crate::i18n::{get_language_from_locale, LanguageCode};
use std::sync::Mutex;
use tracing::debug;

/// Cookie (and local-storage key) holding the user's chosen language.
pub const PREFERRED_LANGUAGE_COOKIE: &str = "preferred_language";

/// One year, in seconds.
pub const PREFERENCE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Persisted language preference.
pub trait PreferenceStore: Send + Sync {
    /// Raw stored value, if any. Not validated.
    fn load(&self) -> Option<String>;

    /// Persist the chosen language.
    fn save(&self, language: LanguageCode) -> Result<(), I18nError>;
}

/// Cookie-backed preference for a single request/response pair.
///
/// `load` reads the incoming `Cookie` header; `save` records the value that
/// should be sent back in `Set-Cookie`.
#[derive(Debug, Default)]
pub struct CookiePreference {
    cookie_header: Option<String>,
    pending: Mutex<Option<String>>,
}

impl CookiePreference {
    pub fn new(cookie_header: Option<&str>) -> Self {
        Self {
            cookie_header: cookie_header.map(str::to_string),
            pending: Mutex::new(None),
        }
    }

    /// The `Set-Cookie` value written by the last `save`, if any.
    pub fn set_cookie_header(&self) -> Option<String> {
        self.pending.lock().ok().and_then(|pending| pending.clone())
    }
}

impl PreferenceStore for CookiePreference {
    fn load(&self) -> Option<String> {
        self.cookie_header
            .as_deref()
            .and_then(|header| read_cookie(header, PREFERRED_LANGUAGE_COOKIE))
    }

    fn save(&self, language: LanguageCode) -> Result<(), I18nError> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|e| I18nError::Preference(e.to_string()))?;
        *pending = Some(preference_cookie(language));
        Ok(())
    }
}

/// In-memory preference, used as the local-storage mirror and in tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|value| value.clone())
    }

    fn save(&self, language: LanguageCode) -> Result<(), I18nError> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| I18nError::Preference(e.to_string()))?;
        *value = Some(language.code().to_string());
        Ok(())
    }
}

/// Render the `Set-Cookie` value for a language preference.
pub fn preference_cookie(language: LanguageCode) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        PREFERRED_LANGUAGE_COOKIE,
        language.code(),
        PREFERENCE_MAX_AGE_SECS
    )
}

/// Read a named cookie from a `Cookie` request header value.
pub fn read_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Persist a language preference without waiting on or reporting the outcome.
///
/// A missing store means there is no DOM-like environment to write to, and
/// the call is a no-op.
pub fn set_language_cookie(store: Option<&dyn PreferenceStore>, language: LanguageCode) {
    let Some(store) = store else {
        return;
    };

    if let Err(e) = store.save(language) {
        debug!("Failed to persist language preference {}: {}", language, e);
    }
}

/// Return the highest-priority language tag of an Accept-Language header.
///
/// Entries are `tag[;q=weight]`; a missing weight counts as 1.0. Entries with
/// an unparsable weight, an empty tag or `q=0` are ignored. Ties keep header
/// order. Returns `None` when nothing usable remains.
pub fn parse_browser_language(header: &str) -> Option<String> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let mut quality = 1.0_f32;
            for param in parts {
                if let Some(value) = param.trim().strip_prefix("q=") {
                    quality = value.trim().parse().ok()?;
                }
            }

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.first().map(|(tag, _)| tag.to_string())
}

/// Map a browser language tag to a supported language family.
///
/// `de*` maps to German and `en*` to English; anything else has no match.
pub fn language_family(tag: &str) -> Option<LanguageCode> {
    let tag = tag.trim().to_ascii_lowercase();
    if tag.starts_with("de") {
        Some(LanguageCode::DE_DE)
    } else if tag.starts_with("en") {
        Some(LanguageCode::EN_US)
    } else {
        None
    }
}

/// Resolve the active language.
///
/// Resolution order:
/// 1. Stored preference, if it is a registered code
/// 2. Family of the highest-priority Accept-Language tag
/// 3. The default language
pub fn detect_user_language(stored: Option<&str>, accept_language: Option<&str>) -> LanguageCode {
    if let Some(language) = stored.and_then(|code| LanguageCode::from_code(code).ok()) {
        return language;
    }

    accept_language
        .and_then(parse_browser_language)
        .and_then(|tag| language_family(&tag))
        .unwrap_or_else(|| get_language_from_locale(None))
}

/// [`detect_user_language`] reading the stored preference from a store.
pub fn detect_with_store(
    store: Option<&dyn PreferenceStore>,
    accept_language: Option<&str>,
) -> LanguageCode {
    let stored = store.and_then(|store| store.load());
    detect_user_language(stored.as_deref(), accept_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_browser_language Tests ====================

    #[test]
    fn test_parse_single_tag() {
        assert_eq!(parse_browser_language("de-DE"), Some("de-DE".to_string()));
    }

    #[test]
    fn test_parse_prefers_highest_quality() {
        assert_eq!(
            parse_browser_language("en;q=0.5,de-CH;q=0.9,fr;q=0.7"),
            Some("de-CH".to_string())
        );
    }

    #[test]
    fn test_parse_missing_quality_defaults_to_one() {
        assert_eq!(
            parse_browser_language("fr;q=0.9, en-GB"),
            Some("en-GB".to_string())
        );
    }

    #[test]
    fn test_parse_ties_keep_header_order() {
        assert_eq!(
            parse_browser_language("de-AT,en-US"),
            Some("de-AT".to_string())
        );
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert_eq!(parse_browser_language(""), None);
        assert_eq!(parse_browser_language(" , ;q=0.5"), None);
        assert_eq!(parse_browser_language("en;q=abc"), None);
    }

    #[test]
    fn test_parse_skips_zero_quality() {
        assert_eq!(
            parse_browser_language("de;q=0,en;q=0.1"),
            Some("en".to_string())
        );
    }

    // ==================== language_family Tests ====================

    #[test]
    fn test_language_family() {
        assert_eq!(language_family("de"), Some(LanguageCode::DE_DE));
        assert_eq!(language_family("DE-at"), Some(LanguageCode::DE_DE));
        assert_eq!(language_family("en-GB"), Some(LanguageCode::EN_US));
        assert_eq!(language_family("fr-FR"), None);
    }

    // ==================== detect_user_language Tests ====================

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(
            detect_user_language(Some("de-DE"), Some("en-US,en;q=0.9")),
            LanguageCode::DE_DE
        );
    }

    #[test]
    fn test_invalid_stored_preference_is_ignored() {
        assert_eq!(
            detect_user_language(Some("xx"), Some("de-DE")),
            LanguageCode::DE_DE
        );
    }

    #[test]
    fn test_header_used_without_preference() {
        assert_eq!(
            detect_user_language(None, Some("de-DE,en;q=0.8")),
            LanguageCode::DE_DE
        );
    }

    #[test]
    fn test_unmatched_header_falls_to_default() {
        assert_eq!(
            detect_user_language(None, Some("fr-FR,es;q=0.8")),
            LanguageCode::EN_US
        );
        assert_eq!(detect_user_language(None, Some("")), LanguageCode::EN_US);
        assert_eq!(detect_user_language(None, None), LanguageCode::EN_US);
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_read_cookie() {
        let header = "session=abc; preferred_language=de-DE; theme=dark";
        assert_eq!(
            read_cookie(header, PREFERRED_LANGUAGE_COOKIE),
            Some("de-DE".to_string())
        );
        assert_eq!(read_cookie("session=abc", PREFERRED_LANGUAGE_COOKIE), None);
        assert_eq!(read_cookie("preferred_language=", PREFERRED_LANGUAGE_COOKIE), None);
    }

    #[test]
    fn test_preference_cookie_attributes() {
        let cookie = preference_cookie(LanguageCode::DE_DE);
        assert_eq!(
            cookie,
            "preferred_language=de-DE; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_cookie_preference_round_trip() {
        let prefs = CookiePreference::new(Some("preferred_language=de-DE"));
        assert_eq!(prefs.load(), Some("de-DE".to_string()));
        assert_eq!(prefs.set_cookie_header(), None);

        prefs.save(LanguageCode::EN_US).unwrap();
        assert!(prefs
            .set_cookie_header()
            .unwrap()
            .starts_with("preferred_language=en-US;"));
    }

    #[test]
    fn test_set_language_cookie_without_store_is_noop() {
        set_language_cookie(None, LanguageCode::DE_DE);
    }

    #[test]
    fn test_set_language_cookie_writes_store() {
        let store = MemoryPreferenceStore::new();
        set_language_cookie(Some(&store), LanguageCode::DE_DE);
        assert_eq!(store.load(), Some("de-DE".to_string()));
    }

    #[test]
    fn test_detect_with_store() {
        let store = MemoryPreferenceStore::with_value("de-DE");
        assert_eq!(
            detect_with_store(Some(&store), Some("en-US")),
            LanguageCode::DE_DE
        );
        assert_eq!(detect_with_store(None, Some("de")), LanguageCode::DE_DE);
    }
}
