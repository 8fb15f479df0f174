//! # Styles
//!
//! Templates never name colors. They name a *semantic* style ("position",
//! "control-active", "warning") and this module maps that name to a
//! `console::Style`. Changing how the terminal looks means editing the theme
//! below, not the templates.
//!
//! Unknown style names are not an error: the text is rendered unstyled with a
//! `(!?)` prefix so a typo in a template shows up in the output instead of
//! silently dropping the style.
//!
//! With color disabled (`--no-color`, or stdout not a color terminal) text
//! passes through untouched, but the missing-style check still applies.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not know.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const CONTROL: &str = "control";
    pub const CONTROL_ACTIVE: &str = "control-active";
    pub const POSITION: &str = "position";
    pub const NAME: &str = "name";
    pub const TAGS: &str = "tags";
    pub const COUNT: &str = "count";
    pub const VALUE: &str = "value";
    pub const EXPAND: &str = "expand";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static VITRINE_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(build_theme);

fn build_theme() -> HashMap<&'static str, Style> {
    let muted = Style::new().color256(245);
    let accent = Style::new().color256(178);

    HashMap::from([
        (names::CONTROL, muted.clone()),
        (names::CONTROL_ACTIVE, accent.clone().bold()),
        (names::POSITION, accent),
        (names::NAME, Style::new().bold()),
        (names::TAGS, muted.clone().italic()),
        (names::COUNT, Style::new().cyan()),
        (names::VALUE, Style::new().cyan()),
        (names::EXPAND, Style::new().green().underlined()),
        (names::MUTED, muted.clone()),
        (names::INFO, muted),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::ERROR, Style::new().red().bold()),
    ])
}

/// Applies the named style to `text`.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match VITRINE_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: &[&str] = &[
        names::CONTROL,
        names::CONTROL_ACTIVE,
        names::POSITION,
        names::NAME,
        names::TAGS,
        names::COUNT,
        names::VALUE,
        names::EXPAND,
        names::MUTED,
        names::INFO,
        names::SUCCESS,
        names::WARNING,
        names::ERROR,
    ];

    #[test]
    fn every_name_is_in_the_theme() {
        for name in ALL_NAMES {
            assert!(VITRINE_THEME.contains_key(name), "missing style {}", name);
        }
    }

    #[test]
    fn plain_output_is_unchanged() {
        assert_eq!(apply(names::NAME, "Rose Noir", false), "Rose Noir");
    }

    #[test]
    fn colored_output_has_escape_codes() {
        let out = apply(names::ERROR, "boom", true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("boom"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(apply("nope", "text", false), "(!?) text");
        assert_eq!(apply("nope", "text", true), "(!?) text");
    }
}
