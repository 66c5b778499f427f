//! Per-session language state.
//!
//! `LanguageContext` owns the current language and its translations for one
//! rendering session. Components read through `t`/`language`/`layout` and
//! change language only through `set_language`. Instances are independent, so
//! every test (or request) can build its own.

use crate::i18n::{
    detect_user_language, get_language_from_locale, get_translation, set_language_cookie,
    LanguageCode, PreferenceStore, TranslationParams, TranslationStore, Translator,
    TranslationsMap,
};
use crate::rtl::{Direction, RtlLanguages, RtlLayout};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Collaborators of a [`LanguageContext`].
#[derive(Clone, Default)]
pub struct ContextOptions {
    /// Where the preference is read from and written to, in priority order
    /// (e.g. cookie first, then the local-storage mirror). Empty means there
    /// is nowhere to persist to.
    pub preferences: Vec<Arc<dyn PreferenceStore>>,

    /// Families treated as right-to-left
    pub rtl_languages: RtlLanguages,
}

struct State {
    language: LanguageCode,
    translations: Arc<TranslationsMap>,
}

struct Inner {
    store: TranslationStore,
    options: ContextOptions,
    state: RwLock<State>,
    /// Incremented by every language switch; only the latest may publish.
    generation: AtomicU64,
}

/// Cheaply cloneable handle to one session's language state.
#[derive(Clone)]
pub struct LanguageContext {
    inner: Arc<Inner>,
}

impl LanguageContext {
    /// Resolve the initial language and load its translations.
    pub async fn initialize(
        store: TranslationStore,
        options: ContextOptions,
        accept_language: Option<&str>,
    ) -> Self {
        let stored = options
            .preferences
            .iter()
            .filter_map(|prefs| prefs.load())
            .find(|value| LanguageCode::from_code(value).is_ok());
        let language = detect_user_language(stored.as_deref(), accept_language);
        info!("Initial language resolved to {}", language);

        let translations = store.load(language).await;
        Self::with_translations(store, options, language, translations)
    }

    /// Build a context from already loaded state.
    pub fn with_translations(
        store: TranslationStore,
        options: ContextOptions,
        language: LanguageCode,
        translations: TranslationsMap,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                options,
                state: RwLock::new(State {
                    language,
                    translations: Arc::new(translations),
                }),
                generation: AtomicU64::new(0),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn language(&self) -> LanguageCode {
        self.read().language
    }

    /// Snapshot of the current translations.
    pub fn translations(&self) -> Arc<TranslationsMap> {
        Arc::clone(&self.read().translations)
    }

    /// Translate `key` with the current translations.
    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        get_translation(&self.read().translations, key, params)
    }

    /// A translator detached from later language switches.
    pub fn translator(&self) -> Translator {
        Translator::new(self.translations().as_ref().clone())
    }

    pub fn direction(&self) -> Direction {
        self.inner
            .options
            .rtl_languages
            .direction(self.language().code())
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn layout(&self) -> RtlLayout {
        RtlLayout::new(self.direction())
    }

    pub fn store(&self) -> &TranslationStore {
        &self.inner.store
    }

    /// Switch language.
    ///
    /// The language and persisted preference change immediately; the fetched
    /// translations replace the whole map in one assignment once they arrive.
    /// If another switch started in the meantime, this switch's translations
    /// are discarded so a slow response never overwrites a newer choice.
    pub async fn set_language(&self, code: &str) -> LanguageCode {
        let language = get_language_from_locale(Some(code));
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.write().language = language;
        for prefs in &self.inner.options.preferences {
            set_language_cookie(Some(prefs.as_ref()), language);
        }

        let translations = self.inner.store.load(language).await;

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            self.inner.store.metrics().record_stale_discard();
            debug!(
                "Discarding translations for {}: a newer language switch is in flight",
                language
            );
            return language;
        }

        let mut state = self.write();
        state.translations = Arc::new(translations);
        info!("Language switched to {}", language);
        language
    }
}
