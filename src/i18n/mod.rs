//! Internationalization (i18n) module for the hotel collection site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `LanguageCode` type and locale normalization
//! - `negotiation`: Stored preference / Accept-Language / default resolution
//! - `template`: `{{param}}` parsing and interpolation
//! - `translator`: Key lookup with key-as-fallback
//! - `fallback`: Bundled translation tables
//! - `store`: Remote translation loading with bundled fallback
//! - `validator`: Offline completeness checks
//! - `metrics`: Fetch counters
//!
//! # Example
//!
//! ```rust
//! use hotel_i18n::i18n::{create_translator, detect_user_language, mock_translations};
//! use hotel_i18n::params;
//!
//! let language = detect_user_language(None, Some("de-DE,en;q=0.8"));
//! let t = create_translator(mock_translations(language));
//!
//! assert_eq!(t("hotels.results", Some(&params! { "count" => 4 })), "4 Hotels gefunden");
//! assert_eq!(t("hotels.unknown", None), "hotels.unknown");
//! ```

mod fallback;
mod language;
mod metrics;
mod negotiation;
mod registry;
mod store;
mod template;
mod translator;
mod validator;

pub use fallback::mock_translations;
pub use language::{get_language_from_locale, is_valid_language, LanguageCode};
pub use metrics::{FetchMetrics, MetricsReport};
pub use negotiation::{
    detect_user_language, detect_with_store, language_family, parse_browser_language,
    preference_cookie, read_cookie, set_language_cookie, CookiePreference,
    MemoryPreferenceStore, PreferenceStore, PREFERENCE_MAX_AGE_SECS, PREFERRED_LANGUAGE_COOKIE,
};
pub use registry::{LanguageMetadata, LanguageRegistry, DEFAULT_LANGUAGE};
pub use store::{
    BundledTranslationSource, HttpTranslationSource, TranslationSource, TranslationStore,
};
pub use template::{interpolate, ParamCheck, ParamValue, Template, TranslationParams};
pub use translator::{
    create_translator, get_translation, merge_translations, Translator, TranslationsMap,
};
pub use validator::{
    check_languages, load_translation_files, validate_translation_completeness,
    CompletenessReport,
};
