use crate::i18n::{HttpTranslationSource, TranslationStore};
use crate::rtl::RtlLanguages;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Translation endpoint
    /// Upstream translation endpoint; `None` serves the bundled tables only
    pub translations_api_url: Option<String>,
    pub translations_fetch_timeout: Option<Duration>,

    // Languages
    pub rtl_languages: RtlLanguages,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            translations_api_url: std::env::var("TRANSLATIONS_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            translations_fetch_timeout: match std::env::var("TRANSLATIONS_FETCH_TIMEOUT_SECS") {
                Ok(value) => Some(Duration::from_secs(
                    value
                        .parse()
                        .context("TRANSLATIONS_FETCH_TIMEOUT_SECS must be a whole number")?,
                )),
                Err(_) => None,
            },

            rtl_languages: std::env::var("RTL_LANGUAGES")
                .map(|list| RtlLanguages::from_list(&list))
                .unwrap_or_default(),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Translation store for this configuration.
    pub fn translation_store(&self, client: reqwest::Client) -> TranslationStore {
        match &self.translations_api_url {
            Some(url) => TranslationStore::new(Arc::new(
                HttpTranslationSource::new(client, url)
                    .with_timeout(self.translations_fetch_timeout),
            )),
            None => TranslationStore::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TRANSLATIONS_API_URL",
        "TRANSLATIONS_FETCH_TIMEOUT_SECS",
        "RTL_LANGUAGES",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.translations_api_url, None);
        assert_eq!(config.translations_fetch_timeout, None);
        assert_eq!(config.rtl_languages, RtlLanguages::default());
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("TRANSLATIONS_API_URL", "https://cms.example.com");
        std::env::set_var("TRANSLATIONS_FETCH_TIMEOUT_SECS", "5");
        std::env::set_var("RTL_LANGUAGES", "ar,he,fa");
        std::env::set_var("PORT", "9000");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(
            config.translations_api_url.as_deref(),
            Some("https://cms.example.com")
        );
        assert_eq!(config.translations_fetch_timeout, Some(Duration::from_secs(5)));
        assert!(config.rtl_languages.is_rtl("fa-IR"));
        assert_eq!(config.port, 9000);
    }

    #[tokio::test]
    async fn test_bundled_store_without_api_url() {
        let config = Config {
            translations_api_url: None,
            translations_fetch_timeout: None,
            rtl_languages: RtlLanguages::default(),
            port: 8080,
        };

        let store = config.translation_store(reqwest::Client::new());
        let de = store.load(crate::i18n::LanguageCode::DE_DE).await;
        assert_eq!(de["nav.contact"], "Kontakt");
        assert_eq!(store.metrics().failures(), 0);
    }

    #[test]
    #[serial]
    fn test_rejects_bad_timeout() {
        clear_env();
        std::env::set_var("TRANSLATIONS_FETCH_TIMEOUT_SECS", "soon");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
