//! Mirroring of inline style maps and logical side resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An inline style value: `"1rem"`, `"left"`, `8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f64)
    }
}

/// Style property name (camelCase) to value.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Property names swapped under right-to-left.
const PROPERTY_PAIRS: &[(&str, &str)] = &[
    ("marginLeft", "marginRight"),
    ("paddingLeft", "paddingRight"),
    ("left", "right"),
    ("borderLeft", "borderRight"),
    ("borderLeftWidth", "borderRightWidth"),
    ("borderLeftColor", "borderRightColor"),
    ("borderLeftStyle", "borderRightStyle"),
    ("borderTopLeftRadius", "borderTopRightRadius"),
    ("borderBottomLeftRadius", "borderBottomRightRadius"),
    ("scrollMarginLeft", "scrollMarginRight"),
    ("scrollPaddingLeft", "scrollPaddingRight"),
];

/// Properties whose value, not name, carries the side.
const VALUE_PAIRS: &[(&str, &str, &str)] = &[
    ("textAlign", "left", "right"),
    ("float", "left", "right"),
    ("clear", "left", "right"),
    ("flexDirection", "row", "row-reverse"),
];

fn mirror_property(name: &str) -> &str {
    PROPERTY_PAIRS
        .iter()
        .find_map(|&(left, right)| {
            if name == left {
                Some(right)
            } else if name == right {
                Some(left)
            } else {
                None
            }
        })
        .unwrap_or(name)
}

fn mirror_value(name: &str, value: &StyleValue) -> StyleValue {
    let StyleValue::Text(text) = value else {
        return value.clone();
    };

    VALUE_PAIRS
        .iter()
        .filter(|(property, _, _)| *property == name)
        .find_map(|&(_, a, b)| {
            if text == a {
                Some(StyleValue::from(b))
            } else if text == b {
                Some(StyleValue::from(a))
            } else {
                None
            }
        })
        .unwrap_or_else(|| value.clone())
}

/// Return a mirrored copy of `styles` under right-to-left, an equal copy
/// otherwise. The input is never modified.
pub fn get_rtl_styles(is_rtl: bool, styles: &StyleMap) -> StyleMap {
    if !is_rtl {
        return styles.clone();
    }

    styles
        .iter()
        .map(|(name, value)| {
            (
                mirror_property(name).to_string(),
                mirror_value(name, value),
            )
        })
        .collect()
}

/// Spacing family for [`get_logical_side_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingKind {
    Margin,
    Padding,
}

/// Direction-agnostic side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalSide {
    Start,
    End,
}

/// Physical side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalSide {
    Left,
    Right,
}

impl PhysicalSide {
    pub fn opposite(self) -> Self {
        match self {
            PhysicalSide::Left => PhysicalSide::Right,
            PhysicalSide::Right => PhysicalSide::Left,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            PhysicalSide::Left => "Left",
            PhysicalSide::Right => "Right",
        }
    }
}

impl LogicalSide {
    /// `Start` is left in LTR and right in RTL; `End` is the inverse.
    pub fn resolve(self, is_rtl: bool) -> PhysicalSide {
        let side = match self {
            LogicalSide::Start => PhysicalSide::Left,
            LogicalSide::End => PhysicalSide::Right,
        };
        if is_rtl {
            side.opposite()
        } else {
            side
        }
    }
}

impl SpacingKind {
    fn prefix(self) -> &'static str {
        match self {
            SpacingKind::Margin => "margin",
            SpacingKind::Padding => "padding",
        }
    }

    pub fn property_name(self, side: PhysicalSide) -> String {
        format!("{}{}", self.prefix(), side.suffix())
    }
}

/// Resolve a logical spacing side to a one-entry physical style map.
pub fn get_logical_side_property(
    kind: SpacingKind,
    side: LogicalSide,
    value: impl Into<StyleValue>,
    is_rtl: bool,
) -> StyleMap {
    StyleMap::from([(kind.property_name(side.resolve(is_rtl)), value.into())])
}

/// Swap a literal "left"/"right" (case-insensitive); other values are kept.
pub fn flip_side_value(value: &str, is_rtl: bool) -> String {
    if !is_rtl {
        return value.to_string();
    }
    match value.to_ascii_lowercase().as_str() {
        "left" => "right".to_string(),
        "right" => "left".to_string(),
        _ => value.to_string(),
    }
}
