//! HTTP surface for translations and language negotiation.
//!
//! - `GET /api/translations?language=<code>`: flat translation map
//! - `GET /api/languages`: supported languages
//! - `GET /api/language`: language detected from cookie and Accept-Language
//! - `PUT /api/language`: choose a language, answered with `Set-Cookie`
//! - `POST /api/content/translate`: apply CMS per-locale overrides to a JSON body
//! - `GET /api/metrics`: translation fetch counters
//! - `GET /health`

use crate::content::get_translated_content;
use crate::i18n::{
    detect_with_store, get_language_from_locale, merge_translations, mock_translations,
    CookiePreference, LanguageCode, MetricsReport, PreferenceStore, TranslationStore,
    TranslationsMap, DEFAULT_LANGUAGE,
};
use crate::rtl::{Direction, RtlLanguages};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: TranslationStore,
    pub rtl_languages: RtlLanguages,
}

impl AppState {
    pub fn new(store: TranslationStore, rtl_languages: RtlLanguages) -> Self {
        Self {
            store,
            rtl_languages,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/translations", get(get_translations))
        .route("/api/languages", get(list_languages))
        .route("/api/language", get(detect_language).put(choose_language))
        .route("/api/content/translate", post(translate_content))
        .route("/api/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResponse {
    pub code: LanguageCode,
    pub name: String,
    pub native_name: String,
    pub flag: String,
    pub direction: Direction,
    pub is_default: bool,
}

impl LanguageResponse {
    fn new(language: LanguageCode, rtl_languages: &RtlLanguages) -> Self {
        Self {
            code: language,
            name: language.name().to_string(),
            native_name: language.native_name().to_string(),
            flag: language.flag().to_string(),
            direction: rtl_languages.direction(language.code()),
            is_default: language.is_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChooseLanguage {
    language: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    language: Option<String>,
    fallback: Option<String>,
}

async fn health() -> &'static str {
    "OK"
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn detect_from_headers(headers: &HeaderMap) -> LanguageCode {
    let cookies = CookiePreference::new(header_str(headers, header::COOKIE));
    detect_with_store(
        Some(&cookies as &dyn PreferenceStore),
        header_str(headers, header::ACCEPT_LANGUAGE),
    )
}

/// Fetched translations layered over the bundled table, so keys the
/// upstream does not know still resolve.
async fn get_translations(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Json<TranslationsMap> {
    if let Some(requested) = query.language.as_deref() {
        if LanguageCode::from_code(requested).is_err() {
            debug!("Unsupported language '{}' requested, using default", requested);
        }
    }
    let language = get_language_from_locale(query.language.as_deref());

    let bundled = mock_translations(language);
    let fetched = state.store.load(language).await;
    Json(merge_translations(&[&bundled, &fetched]))
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageResponse>> {
    Json(
        LanguageCode::all()
            .into_iter()
            .map(|language| LanguageResponse::new(language, &state.rtl_languages))
            .collect(),
    )
}

async fn detect_language(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<LanguageResponse> {
    let language = detect_from_headers(&headers);
    Json(LanguageResponse::new(language, &state.rtl_languages))
}

async fn choose_language(
    State(state): State<AppState>,
    Json(body): Json<ChooseLanguage>,
) -> Response {
    let language = get_language_from_locale(Some(&body.language));
    let prefs = CookiePreference::default();

    let mut response =
        Json(LanguageResponse::new(language, &state.rtl_languages)).into_response();

    if let Err(e) = prefs.save(language) {
        warn!("Could not record language preference: {}", e);
        return response;
    }

    match prefs
        .set_cookie_header()
        .and_then(|cookie| HeaderValue::from_str(&cookie).ok())
    {
        Some(cookie) => {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
        None => warn!("Language preference cookie for {} not set", language),
    }
    response
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.store.metrics().report())
}

async fn translate_content(
    headers: HeaderMap,
    Query(query): Query<ContentQuery>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let language = query
        .language
        .unwrap_or_else(|| detect_from_headers(&headers).code().to_string());
    let fallback = query
        .fallback
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    (
        StatusCode::OK,
        Json(get_translated_content(&body, &language, &fallback)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(entries: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in entries {
            map.insert(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_detect_from_cookie_before_header() {
        let map = headers(&[
            (header::COOKIE, "preferred_language=de-DE"),
            (header::ACCEPT_LANGUAGE, "en-US"),
        ]);
        assert_eq!(detect_from_headers(&map), LanguageCode::DE_DE);
    }

    #[test]
    fn test_detect_from_accept_language() {
        let map = headers(&[(header::ACCEPT_LANGUAGE, "de-AT,de;q=0.9")]);
        assert_eq!(detect_from_headers(&map), LanguageCode::DE_DE);
    }

    #[test]
    fn test_detect_without_headers() {
        assert_eq!(detect_from_headers(&HeaderMap::new()), LanguageCode::EN_US);
    }

    #[test]
    fn test_language_response_shape() {
        let response = LanguageResponse::new(LanguageCode::DE_DE, &RtlLanguages::default());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "de-DE");
        assert_eq!(json["nativeName"], "Deutsch");
        assert_eq!(json["direction"], "ltr");
        assert_eq!(json["isDefault"], false);
    }
}
