//! Translation store: remote translations with a bundled fallback.
//!
//! `GET {base}/api/translations?language=<code>` returns a flat JSON object of
//! strings. Any failure (transport, non-2xx, undecodable body, configured
//! timeout) is logged and replaced by the bundled table for that language.
//! There are no retries.

use crate::error::I18nError;
use crate::i18n::{mock_translations, FetchMetrics, LanguageCode, TranslationsMap};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Somewhere translations can be fetched from.
pub trait TranslationSource: Send + Sync {
    fn fetch(&self, language: LanguageCode) -> BoxFuture<'_, Result<TranslationsMap, I18nError>>;
}

/// Translation endpoint reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTranslationSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpTranslationSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/translations", self.base_url)
    }

    async fn fetch_map(&self, language: LanguageCode) -> Result<TranslationsMap, I18nError> {
        let mut request = self
            .client
            .get(self.endpoint())
            .query(&[("language", language.code())]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| timeout_or(e, language))?;

        if !response.status().is_success() {
            return Err(I18nError::Status {
                status: response.status(),
                language: language.code().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| timeout_or(e, language))?;
        serde_json::from_str(&body).map_err(|source| I18nError::Decode {
            language: language.code().to_string(),
            source,
        })
    }
}

fn timeout_or(error: reqwest::Error, language: LanguageCode) -> I18nError {
    if error.is_timeout() {
        I18nError::Timeout(language.code().to_string())
    } else {
        I18nError::Request(error)
    }
}

impl TranslationSource for HttpTranslationSource {
    fn fetch(&self, language: LanguageCode) -> BoxFuture<'_, Result<TranslationsMap, I18nError>> {
        self.fetch_map(language).boxed()
    }
}

/// Source serving the bundled tables directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTranslationSource;

impl TranslationSource for BundledTranslationSource {
    fn fetch(&self, language: LanguageCode) -> BoxFuture<'_, Result<TranslationsMap, I18nError>> {
        async move { Ok(mock_translations(language)) }.boxed()
    }
}

/// Loads translations for a language, never failing.
#[derive(Clone)]
pub struct TranslationStore {
    source: Arc<dyn TranslationSource>,
    metrics: Arc<FetchMetrics>,
}

impl TranslationStore {
    pub fn new(source: Arc<dyn TranslationSource>) -> Self {
        Self {
            source,
            metrics: Arc::new(FetchMetrics::new()),
        }
    }

    /// Store backed by the bundled tables only.
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledTranslationSource))
    }

    pub fn metrics(&self) -> &FetchMetrics {
        &self.metrics
    }

    /// Fetch translations for `language`, falling back to the bundled table.
    pub async fn load(&self, language: LanguageCode) -> TranslationsMap {
        self.metrics.record_fetch();

        match self.source.fetch(language).await {
            Ok(translations) => {
                debug!("Loaded {} translations for {}", translations.len(), language);
                translations
            }
            Err(e) => {
                self.metrics.record_failure();
                self.metrics.record_fallback();
                warn!(
                    "Failed to fetch translations for {}, using bundled fallback: {}",
                    language, e
                );
                mock_translations(language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl TranslationSource for FailingSource {
        fn fetch(
            &self,
            language: LanguageCode,
        ) -> BoxFuture<'_, Result<TranslationsMap, I18nError>> {
            async move { Err(I18nError::Timeout(language.code().to_string())) }.boxed()
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source = HttpTranslationSource::new(reqwest::Client::new(), "http://cms.local/");
        assert_eq!(source.endpoint(), "http://cms.local/api/translations");
    }

    #[tokio::test]
    async fn test_bundled_store() {
        let store = TranslationStore::bundled();
        let de = store.load(LanguageCode::DE_DE).await;
        assert_eq!(de["nav.home"], "Startseite");
        assert_eq!(store.metrics().fallbacks(), 0);
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let store = TranslationStore::new(Arc::new(FailingSource));
        let de = store.load(LanguageCode::DE_DE).await;

        assert_eq!(de, mock_translations(LanguageCode::DE_DE));
        assert_eq!(store.metrics().fetches(), 1);
        assert_eq!(store.metrics().failures(), 1);
        assert_eq!(store.metrics().fallbacks(), 1);
    }

    #[test]
    fn test_load_blocking() {
        let store = TranslationStore::bundled();
        let en = tokio_test::block_on(store.load(LanguageCode::EN_US));
        assert_eq!(en["hero.cta"], "Explore hotels");
    }
}
