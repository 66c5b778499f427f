//! Per-locale overrides embedded in CMS content.
//!
//! Any object may carry a `translations` array whose entries look like
//! `{ "language": "de-DE", "id": 7, "title": "..." }`. The matching entry's
//! fields (except `language` and `id`) replace the object's own fields.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

const TRANSLATIONS_FIELD: &str = "translations";
const SKIPPED_FIELDS: &[&str] = &["language", "id"];

/// Apply `language` overrides (or `fallback_language` ones) throughout `item`.
///
/// Returns a new tree; `item` is never modified. Nodes without a
/// `translations` array are copied as they are, but their children are still
/// visited.
pub fn get_translated_content(item: &Value, language: &str, fallback_language: &str) -> Value {
    match item {
        Value::Object(object) => {
            let overlaid = overlay_translation(object, language, fallback_language);
            Value::Object(
                overlaid
                    .into_iter()
                    .map(|(key, value)| {
                        let translated = get_translated_content(&value, language, fallback_language);
                        (key, translated)
                    })
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|value| get_translated_content(value, language, fallback_language))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn overlay_translation(
    object: &Map<String, Value>,
    language: &str,
    fallback_language: &str,
) -> Map<String, Value> {
    let mut result = object.clone();

    let Some(Value::Array(entries)) = object.get(TRANSLATIONS_FIELD) else {
        return result;
    };

    let matched = find_entry(entries, language).or_else(|| find_entry(entries, fallback_language));
    if let Some(entry) = matched {
        for (key, value) in entry {
            if !SKIPPED_FIELDS.contains(&key.as_str()) {
                result.insert(key.clone(), value.clone());
            }
        }
    }

    result
}

fn find_entry<'a>(entries: &'a [Value], language: &str) -> Option<&'a Map<String, Value>> {
    entries.iter().find_map(|entry| {
        let entry = entry.as_object()?;
        (entry.get("language").and_then(Value::as_str) == Some(language)).then_some(entry)
    })
}

/// Typed form of [`get_translated_content`].
///
/// If `item` cannot round-trip through JSON, the untranslated clone is
/// returned.
pub fn translate_content<T>(item: &T, language: &str, fallback_language: &str) -> T
where
    T: Serialize + DeserializeOwned + Clone,
{
    let translated = serde_json::to_value(item)
        .map(|value| get_translated_content(&value, language, fallback_language))
        .and_then(serde_json::from_value);

    match translated {
        Ok(value) => value,
        Err(e) => {
            debug!("Content translation to {} skipped: {}", language, e);
            item.clone()
        }
    }
}
