//! Report translation gaps against the default language.
//!
//! Usage: `check-translations [DIR]`
//!
//! With `DIR`, reads `<DIR>/<code>.json` for each supported language.
//! Without it, checks the bundled tables. Exits non-zero if any key is
//! missing.

use anyhow::Result;
use hotel_i18n::i18n::{
    check_languages, load_translation_files, mock_translations, LanguageCode, TranslationsMap,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotel_i18n=info".parse()?)
                .add_directive("check_translations=info".parse()?),
        )
        .init();

    let maps: BTreeMap<LanguageCode, TranslationsMap> = match std::env::args().nth(1) {
        Some(dir) => {
            info!("Checking translation files in {}", dir);
            load_translation_files(&PathBuf::from(dir))?
        }
        None => {
            info!("Checking bundled translations");
            LanguageCode::all()
                .into_iter()
                .map(|language| (language, mock_translations(language)))
                .collect()
        }
    };

    let report = check_languages(&maps);

    for (language, keys) in &report.missing {
        println!("{}: {} missing", language, keys.len());
        for key in keys {
            println!("  - {}", key);
        }
    }
    for (language, keys) in &report.extra {
        warn!("{} defines keys unknown to the default language: {:?}", language, keys);
    }
    for (language, keys) in &report.placeholder_mismatches {
        warn!("{} placeholders differ from the default language: {:?}", language, keys);
    }

    if !report.is_complete() {
        anyhow::bail!("{} translation keys missing", report.total_missing());
    }

    println!("All {} languages complete", maps.len());
    Ok(())
}
