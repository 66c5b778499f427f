use thiserror::Error;

/// Errors produced at the edges of the translation subsystem.
///
/// None of these reach the rendering side: the store and the context turn
/// every variant into a fallback value and a log line.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation endpoint returned {status} for {language}")]
    Status {
        status: reqwest::StatusCode,
        language: String,
    },

    #[error("Failed to decode translations for {language}: {source}")]
    Decode {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation request for {0} timed out")]
    Timeout(String),

    #[error("Preference store unavailable: {0}")]
    Preference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_message() {
        let err = I18nError::UnknownLanguage("fr-FR".to_string());
        assert_eq!(err.to_string(), "Unknown language code: 'fr-FR'");
    }

    #[test]
    fn test_status_message_mentions_code() {
        let err = I18nError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            language: "de-DE".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("de-DE"));
    }

    #[test]
    fn test_decode_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = I18nError::Decode {
            language: "en-US".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
