//! Direction-bound layout helpers for components.

use crate::rtl::{
    flip_side_value, get_logical_side_property, rtl_class, rtl_flip_classes, Direction,
    LogicalSide, PhysicalSide, SpacingKind, StyleMap, StyleValue,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Justify => "justify",
        }
    }
}

/// Layout decisions for one text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RtlLayout {
    direction: Direction,
}

impl RtlLayout {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    /// Rows reverse under RTL; columns are unaffected.
    pub fn flex_direction(&self, base: FlexDirection) -> FlexDirection {
        if !self.is_rtl() {
            return base;
        }
        match base {
            FlexDirection::Row => FlexDirection::RowReverse,
            FlexDirection::RowReverse => FlexDirection::Row,
            other => other,
        }
    }

    pub fn text_align(&self, base: TextAlign) -> TextAlign {
        if !self.is_rtl() {
            return base;
        }
        match base {
            TextAlign::Left => TextAlign::Right,
            TextAlign::Right => TextAlign::Left,
            other => other,
        }
    }

    pub fn side_property(
        &self,
        kind: SpacingKind,
        side: LogicalSide,
        value: impl Into<StyleValue>,
    ) -> StyleMap {
        get_logical_side_property(kind, side, value, self.is_rtl())
    }

    /// Reverse a sequence under RTL; identity under LTR.
    pub fn ordered<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.is_rtl() {
            items.reverse();
        }
        items
    }

    pub fn flip(&self, side: PhysicalSide) -> PhysicalSide {
        if self.is_rtl() {
            side.opposite()
        } else {
            side
        }
    }

    /// Mirror a literal "left"/"right" value.
    pub fn flip_value(&self, value: &str) -> String {
        flip_side_value(value, self.is_rtl())
    }

    /// Mirror a rotation around the vertical axis under RTL.
    ///
    /// 180° is its own mirror image; other angles map to `360 - degrees`
    /// (normalized into `0..360`).
    pub fn icon_rotation(&self, degrees: i32) -> i32 {
        let normalized = degrees.rem_euclid(360);
        if !self.is_rtl() || normalized == 180 {
            return degrees;
        }
        (360 - normalized) % 360
    }

    pub fn class<'a>(&self, ltr_class: &'a str, rtl: &'a str) -> &'a str {
        rtl_class(ltr_class, rtl, self.is_rtl())
    }

    pub fn flip_classes(&self, class_string: &str) -> String {
        rtl_flip_classes(class_string, self.is_rtl())
    }
}
