//! Translation, language negotiation and RTL layout for the hotel collection
//! site.
//!
//! - `i18n`: languages, negotiation, translation lookup and loading
//! - `rtl`: direction detection and layout mirroring
//! - `context`: per-session language state
//! - `content`: per-locale overrides inside CMS content
//! - `server`: HTTP endpoints
//! - `config`: environment configuration

pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod i18n;
pub mod rtl;
pub mod server;

pub use context::{ContextOptions, LanguageContext};
pub use error::I18nError;
