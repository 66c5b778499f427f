//! Key lookup with `{{param}}` interpolation.
//!
//! A missing key resolves to the key itself. This is the fallback policy for
//! the whole site: untranslated keys show up in the page instead of an error.

use crate::i18n::template::{interpolate, Template, TranslationParams};
use std::collections::BTreeMap;
use tracing::debug;

/// Flat mapping from translation key to template string for one language.
pub type TranslationsMap = BTreeMap<String, String>;

/// Resolve `key` in `translations` and interpolate `params`.
///
/// Never fails: a missing key yields the key, a missing param leaves its
/// placeholder untouched.
pub fn get_translation(
    translations: &TranslationsMap,
    key: &str,
    params: Option<&TranslationParams>,
) -> String {
    let value = translations.get(key).map(String::as_str).unwrap_or(key);

    match params {
        Some(params) => {
            if tracing::enabled!(tracing::Level::DEBUG) {
                let check = Template::parse(value).check(params);
                if !check.is_exact() {
                    debug!(
                        "Param mismatch for '{}': missing {:?}, unused {:?}",
                        key, check.missing, check.unused
                    );
                }
            }
            interpolate(value, params)
        }
        None => value.to_string(),
    }
}

/// Translator bound to one language's map.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    translations: TranslationsMap,
}

impl Translator {
    pub fn new(translations: TranslationsMap) -> Self {
        Self { translations }
    }

    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        get_translation(&self.translations, key, params)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    pub fn translations(&self) -> &TranslationsMap {
        &self.translations
    }
}

/// Closure form of [`Translator::t`].
pub fn create_translator(
    translations: TranslationsMap,
) -> impl Fn(&str, Option<&TranslationParams>) -> String {
    let translator = Translator::new(translations);
    move |key, params| translator.t(key, params)
}

/// Right-biased union: later maps overwrite earlier ones on duplicate keys.
pub fn merge_translations(maps: &[&TranslationsMap]) -> TranslationsMap {
    let mut merged = TranslationsMap::new();
    for map in maps {
        merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    fn sample() -> TranslationsMap {
        TranslationsMap::from([
            ("hotels.filter_title".to_string(), "Filter hotels".to_string()),
            (
                "hotels.results".to_string(),
                "{{count}} hotels in {{city}}".to_string(),
            ),
        ])
    }

    #[test]
    fn test_lookup_existing_key() {
        let t = create_translator(sample());
        assert_eq!(t("hotels.filter_title", None), "Filter hotels");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = create_translator(sample());
        assert_eq!(t("hotels.unknown", None), "hotels.unknown");
    }

    #[test]
    fn test_interpolation() {
        let translator = Translator::new(sample());
        let params = params! { "count" => 12, "city" => "Munich" };
        assert_eq!(
            translator.t("hotels.results", Some(&params)),
            "12 hotels in Munich"
        );
    }

    #[test]
    fn test_partial_params_leave_tokens() {
        let params = params! { "count" => 1 };
        let once = get_translation(&sample(), "hotels.results", Some(&params));
        assert_eq!(once, "1 hotels in {{city}}");
    }

    #[test]
    fn test_repeated_translation_keeps_missing_tokens() {
        let params = params! { "count" => 1 };
        let once = get_translation(&sample(), "hotels.results", Some(&params));
        let twice = get_translation(&sample(), &once, Some(&params));

        assert_eq!(twice, once);
        assert!(!twice.contains("{{count}}"));
        assert!(twice.contains("{{city}}"));
    }

    #[test]
    fn test_missing_key_is_interpolated_too() {
        let params = params! { "n" => 5 };
        assert_eq!(get_translation(&sample(), "{{n}} left", Some(&params)), "5 left");
    }

    #[test]
    fn test_merge_later_wins() {
        let base = TranslationsMap::from([
            ("a".to_string(), "base-a".to_string()),
            ("b".to_string(), "base-b".to_string()),
        ]);
        let overrides = TranslationsMap::from([
            ("b".to_string(), "override-b".to_string()),
            ("c".to_string(), "override-c".to_string()),
        ]);

        let merged = merge_translations(&[&base, &overrides]);
        assert_eq!(merged["a"], "base-a");
        assert_eq!(merged["b"], "override-b");
        assert_eq!(merged["c"], "override-c");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_nothing() {
        assert!(merge_translations(&[]).is_empty());
    }

    #[test]
    fn test_has_key() {
        let translator = Translator::new(sample());
        assert!(translator.has_key("hotels.results"));
        assert!(!translator.has_key("nav.home"));
    }
}
