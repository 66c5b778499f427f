use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Language families written right-to-left when nothing else is configured.
pub const DEFAULT_RTL_FAMILIES: &[&str] = &["ar", "he"];

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed list of right-to-left language families (base tags like "ar").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtlLanguages {
    families: Vec<String>,
}

impl Default for RtlLanguages {
    fn default() -> Self {
        Self::new(DEFAULT_RTL_FAMILIES.iter().copied())
    }
}

impl RtlLanguages {
    pub fn new<'a>(families: impl IntoIterator<Item = &'a str>) -> Self {
        let mut families: Vec<String> = families
            .into_iter()
            .map(base_tag)
            .filter(|family| !family.is_empty())
            .collect();
        families.sort();
        families.dedup();
        Self { families }
    }

    /// Parse a comma separated list such as `"ar,he,fa"`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn is_rtl(&self, code: &str) -> bool {
        let base = base_tag(code);
        self.families.iter().any(|family| *family == base)
    }

    pub fn direction(&self, code: &str) -> Direction {
        if self.is_rtl(code) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

/// Lowercased primary subtag: "ar-AE" -> "ar", "he_IL" -> "he".
fn base_tag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn default_families() -> &'static RtlLanguages {
    static DEFAULT: OnceLock<RtlLanguages> = OnceLock::new();
    DEFAULT.get_or_init(RtlLanguages::default)
}

/// True iff the language's base tag is a known right-to-left family.
pub fn is_rtl_language(code: &str) -> bool {
    default_families().is_rtl(code)
}

pub fn get_direction(code: &str) -> Direction {
    default_families().direction(code)
}
