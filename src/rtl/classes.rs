//! Mirroring of utility class tokens.
//!
//! The mapping is an explicit left/right pairing table. Tokens outside the
//! table have no horizontal meaning as far as this module is concerned and are
//! returned unchanged.

/// Whole-token pairs.
const EXACT_PAIRS: &[(&str, &str)] = &[
    ("text-left", "text-right"),
    ("float-left", "float-right"),
    ("clear-left", "clear-right"),
    ("flex-row", "flex-row-reverse"),
    ("justify-start", "justify-end"),
    ("justify-items-start", "justify-items-end"),
    ("justify-self-start", "justify-self-end"),
    ("items-start", "items-end"),
    ("self-start", "self-end"),
    ("content-start", "content-end"),
    ("place-items-start", "place-items-end"),
    ("border-l", "border-r"),
    ("rounded-l", "rounded-r"),
    ("rounded-tl", "rounded-tr"),
    ("rounded-bl", "rounded-br"),
    ("origin-left", "origin-right"),
    ("origin-top-left", "origin-top-right"),
    ("origin-bottom-left", "origin-bottom-right"),
    ("bg-left", "bg-right"),
    ("bg-left-top", "bg-right-top"),
    ("bg-left-bottom", "bg-right-bottom"),
];

/// Prefix pairs, followed by a value (`ml-4`, `border-l-2`, `left-1/2`).
const PREFIX_PAIRS: &[(&str, &str)] = &[
    ("ml-", "mr-"),
    ("pl-", "pr-"),
    ("left-", "right-"),
    ("border-l-", "border-r-"),
    ("rounded-l-", "rounded-r-"),
    ("rounded-tl-", "rounded-tr-"),
    ("rounded-bl-", "rounded-br-"),
    ("scroll-ml-", "scroll-mr-"),
    ("scroll-pl-", "scroll-pr-"),
];

/// Pick `rtl_class` under right-to-left, `ltr_class` otherwise.
pub fn rtl_class<'a>(ltr_class: &'a str, rtl_class: &'a str, is_rtl: bool) -> &'a str {
    if is_rtl {
        rtl_class
    } else {
        ltr_class
    }
}

/// Mirror one class token when `is_rtl`; identity otherwise.
///
/// Variant prefixes (`md:`, `hover:`) and the negative-value marker
/// (`-ml-2`) are preserved around the mirrored core.
pub fn rtl_flip(class_name: &str, is_rtl: bool) -> String {
    if !is_rtl {
        return class_name.to_string();
    }

    let (variants, utility) = match class_name.rfind(':') {
        Some(idx) => class_name.split_at(idx + 1),
        None => ("", class_name),
    };

    match flip_utility(utility) {
        Some(flipped) => format!("{}{}", variants, flipped),
        None => class_name.to_string(),
    }
}

fn flip_utility(utility: &str) -> Option<String> {
    if let Some(flipped) = swap_exact(utility) {
        return Some(flipped.to_string());
    }

    // translate-x flips by toggling its sign rather than its side
    if let Some(value) = utility.strip_prefix("-translate-x-") {
        return Some(format!("translate-x-{}", value));
    }
    if let Some(value) = utility.strip_prefix("translate-x-") {
        return Some(format!("-translate-x-{}", value));
    }

    let (negative, core) = match utility.strip_prefix('-') {
        Some(core) => ("-", core),
        None => ("", utility),
    };

    PREFIX_PAIRS.iter().find_map(|&(left, right)| {
        if let Some(value) = core.strip_prefix(left) {
            Some(format!("{}{}{}", negative, right, value))
        } else {
            core.strip_prefix(right)
                .map(|value| format!("{}{}{}", negative, left, value))
        }
    })
}

fn swap_exact(utility: &str) -> Option<&'static str> {
    EXACT_PAIRS.iter().find_map(|&(left, right)| {
        if utility == left {
            Some(right)
        } else if utility == right {
            Some(left)
        } else {
            None
        }
    })
}

/// Apply [`rtl_flip`] to every whitespace separated token, keeping order.
pub fn rtl_flip_classes(class_string: &str, is_rtl: bool) -> String {
    class_string
        .split_whitespace()
        .map(|class_name| rtl_flip(class_name, is_rtl))
        .collect::<Vec<_>>()
        .join(" ")
}
