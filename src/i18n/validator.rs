//! Translation completeness validation.
//!
//! Offline diagnostic comparing every language's map against the default
//! language. Rendering never consults it: a missing key falls back to the key
//! itself at lookup time.

use crate::i18n::{LanguageCode, Template, TranslationsMap};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Keys of `default_map` missing from each other language.
///
/// Only languages with at least one gap appear in the result. Keys are in
/// sorted order.
pub fn validate_translation_completeness(
    default_map: &TranslationsMap,
    other_maps: &BTreeMap<String, TranslationsMap>,
) -> BTreeMap<String, Vec<String>> {
    other_maps
        .iter()
        .filter_map(|(language, map)| {
            let missing: Vec<String> = default_map
                .keys()
                .filter(|key| !map.contains_key(*key))
                .cloned()
                .collect();
            (!missing.is_empty()).then(|| (language.clone(), missing))
        })
        .collect()
}

/// Full report for a set of translation maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    /// Default-language keys missing per language
    pub missing: BTreeMap<String, Vec<String>>,

    /// Keys per language that the default language does not define
    pub extra: BTreeMap<String, Vec<String>>,

    /// Keys per language whose placeholder set differs from the default
    pub placeholder_mismatches: BTreeMap<String, Vec<String>>,
}

impl CompletenessReport {
    pub fn build(
        default_map: &TranslationsMap,
        other_maps: &BTreeMap<String, TranslationsMap>,
    ) -> Self {
        let missing = validate_translation_completeness(default_map, other_maps);
        let mut extra = BTreeMap::new();
        let mut placeholder_mismatches = BTreeMap::new();

        for (language, map) in other_maps {
            let unknown: Vec<String> = map
                .keys()
                .filter(|key| !default_map.contains_key(*key))
                .cloned()
                .collect();
            if !unknown.is_empty() {
                extra.insert(language.clone(), unknown);
            }

            let mismatched: Vec<String> = map
                .iter()
                .filter_map(|(key, value)| {
                    let reference = default_map.get(key)?;
                    (placeholder_set(reference) != placeholder_set(value)).then(|| key.clone())
                })
                .collect();
            if !mismatched.is_empty() {
                placeholder_mismatches.insert(language.clone(), mismatched);
            }
        }

        Self {
            missing,
            extra,
            placeholder_mismatches,
        }
    }

    /// No language is missing a default-language key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Extra keys or placeholder mismatches were found.
    pub fn has_warnings(&self) -> bool {
        !self.extra.is_empty() || !self.placeholder_mismatches.is_empty()
    }

    pub fn total_missing(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }
}

/// Read `<dir>/<code>.json` for every supported language.
///
/// The default language's file must exist. A missing file for any other
/// language loads as an empty map, so every default key is reported missing.
pub fn load_translation_files(dir: &Path) -> Result<BTreeMap<LanguageCode, TranslationsMap>> {
    let mut maps = BTreeMap::new();

    for language in LanguageCode::all() {
        let path = dir.join(format!("{}.json", language.code()));
        if !path.exists() {
            if language.is_default() {
                anyhow::bail!("Default language file {} not found", path.display());
            }
            warn!("No translation file for {} at {}", language, path.display());
            maps.insert(language, TranslationsMap::new());
            continue;
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let map: TranslationsMap = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded {} keys for {}", map.len(), language);
        maps.insert(language, map);
    }

    Ok(maps)
}

/// Build a report comparing every language against the default one.
pub fn check_languages(maps: &BTreeMap<LanguageCode, TranslationsMap>) -> CompletenessReport {
    let default_language = LanguageCode::default_language();
    let empty = TranslationsMap::new();
    let default_map = maps.get(&default_language).unwrap_or(&empty);

    let others: BTreeMap<String, TranslationsMap> = maps
        .iter()
        .filter(|(language, _)| **language != default_language)
        .map(|(language, map)| (language.code().to_string(), map.clone()))
        .collect();

    CompletenessReport::build(default_map, &others)
}

fn placeholder_set(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Template::parse(template)
        .placeholders()
        .into_iter()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> TranslationsMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_complete_languages_are_omitted() {
        let default_map = map(&[("a", "A"), ("b", "B")]);
        let others = BTreeMap::from([("de-DE".to_string(), map(&[("a", "A"), ("b", "B")]))]);

        assert!(validate_translation_completeness(&default_map, &others).is_empty());
    }

    #[test]
    fn test_reports_missing_keys_sorted() {
        let default_map = map(&[("z", "Z"), ("a", "A"), ("m", "M")]);
        let others = BTreeMap::from([
            ("de-DE".to_string(), map(&[("m", "M")])),
            ("fr-FR".to_string(), map(&[("a", "A"), ("m", "M"), ("z", "Z")])),
        ]);

        let gaps = validate_translation_completeness(&default_map, &others);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps["de-DE"], vec!["a", "z"]);
    }

    #[test]
    fn test_report_extra_and_placeholders() {
        let default_map = map(&[("greet", "Hi {{name}}"), ("bye", "Bye")]);
        let others = BTreeMap::from([(
            "de-DE".to_string(),
            map(&[("greet", "Hallo {{nom}}"), ("bye", "Tschüss"), ("old", "Alt")]),
        )]);

        let report = CompletenessReport::build(&default_map, &others);
        assert!(report.is_complete());
        assert!(report.has_warnings());
        assert_eq!(report.extra["de-DE"], vec!["old"]);
        assert_eq!(report.placeholder_mismatches["de-DE"], vec!["greet"]);
    }

    #[test]
    fn test_report_counts_missing() {
        let default_map = map(&[("a", "A"), ("b", "B")]);
        let others = BTreeMap::from([
            ("de-DE".to_string(), map(&[])),
            ("nl-NL".to_string(), map(&[("a", "A")])),
        ]);

        let report = CompletenessReport::build(&default_map, &others);
        assert!(!report.is_complete());
        assert_eq!(report.total_missing(), 3);
    }

    #[test]
    fn test_check_languages_uses_default_as_reference() {
        let maps = BTreeMap::from([
            (LanguageCode::EN_US, map(&[("a", "A"), ("b", "B")])),
            (LanguageCode::DE_DE, map(&[("a", "A")])),
        ]);

        let report = check_languages(&maps);
        assert_eq!(report.missing["de-DE"], vec!["b"]);
        assert!(!report.missing.contains_key("en-US"));
    }

    #[test]
    fn test_placeholder_order_does_not_matter() {
        let default_map = map(&[("p", "{{page}} / {{total}}")]);
        let others = BTreeMap::from([("de-DE".to_string(), map(&[("p", "{{total}}: {{page}}")]))]);

        let report = CompletenessReport::build(&default_map, &others);
        assert!(!report.has_warnings());
    }
}
