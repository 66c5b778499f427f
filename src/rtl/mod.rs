//! Right-to-left layout support.
//!
//! Everything here is a pure function of its input and a direction flag.
//!
//! - `direction`: RTL language families and `Direction`
//! - `classes`: utility class token mirroring
//! - `styles`: inline style mirroring and logical sides
//! - `layout`: the same helpers bound to one direction

mod classes;
mod direction;
mod layout;
mod styles;

pub use classes::{rtl_class, rtl_flip, rtl_flip_classes};
pub use direction::{get_direction, is_rtl_language, Direction, RtlLanguages, DEFAULT_RTL_FAMILIES};
pub use layout::{FlexDirection, RtlLayout, TextAlign};
pub use styles::{
    flip_side_value, get_logical_side_property, get_rtl_styles, LogicalSide, PhysicalSide,
    SpacingKind, StyleMap, StyleValue,
};
