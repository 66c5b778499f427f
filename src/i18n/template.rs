//! `{{param}}` templates.
//!
//! A template is parsed once into literal and placeholder segments, so the
//! set of placeholder names is known before rendering and can be checked
//! against the parameters a call site supplies.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_.\-]+)\}\}").unwrap())
}

/// A substitution value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Integer(n) => write!(f, "{}", n),
            // Integral floats print without a fractional part ("2", not "2.0")
            ParamValue::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            ParamValue::Float(n) if n.is_nan() => f.write_str("NaN"),
            ParamValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            ParamValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_param!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond i64 keep their exact decimal form as text
macro_rules! wide_integer_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(n) => ParamValue::Integer(n),
                        Err(_) => ParamValue::Text(value.to_string()),
                    }
                }
            }
        )*
    };
}

wide_integer_param!(u64, usize, i128, u128);

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(value as f64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Named substitution values for one translate call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationParams {
    values: BTreeMap<String, ParamValue>,
}

impl TranslationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build [`TranslationParams`] inline.
///
/// ```
/// use hotel_i18n::params;
///
/// let params = params! { "count" => 3, "city" => "Berlin" };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = $crate::i18n::TranslationParams::new();
        $(
            params.insert($name, $value);
        )*
        params
    }};
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, raw: String },
}

/// A parsed template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Mismatch between a template's placeholders and the supplied params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamCheck {
    /// Placeholders with no supplied value (rendered verbatim)
    pub missing: Vec<String>,
    /// Supplied params the template never references
    pub unused: Vec<String>,
}

impl ParamCheck {
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for cap in placeholder_regex().captures_iter(source) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder {
                name: name.as_str().to_string(),
                raw: whole.as_str().to_string(),
            });
            last = whole.end();
        }

        if last < source.len() {
            segments.push(Segment::Literal(source[last..].to_string()));
        }

        Self { segments }
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder { name, .. } = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every supplied param; placeholders without a value stay as
    /// written.
    pub fn render(&self, params: &TranslationParams) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, raw } => match params.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }

    pub fn check(&self, params: &TranslationParams) -> ParamCheck {
        let placeholders = self.placeholders();
        ParamCheck {
            missing: placeholders
                .iter()
                .filter(|name| params.get(name).is_none())
                .map(|name| name.to_string())
                .collect(),
            unused: params
                .names()
                .filter(|name| !placeholders.contains(name))
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Interpolate `params` into `template` in one step.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() || !template.contains("{{") {
        return template.to_string();
    }
    Template::parse(template).render(params)
}
