use anyhow::{Context, Result};
use hotel_i18n::config::Config;
use hotel_i18n::server::{router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotel_i18n=info".parse()?),
        )
        .init();

    info!("Starting hotel i18n service");

    let config = Config::from_env()?;

    match &config.translations_api_url {
        Some(url) => info!("Loading translations from {}", url),
        None => info!("No TRANSLATIONS_API_URL set, serving bundled translations"),
    }

    let store = config.translation_store(reqwest::Client::new());
    let app = router(AppState::new(store, config.rtl_languages.clone()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
