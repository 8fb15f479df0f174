//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in
//! `cli/templates/` and embedded here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line
//! holding only a block tag (`{% for %}`, `{% if %}`, ...) produces no output
//! at all. Every visible line break in a template is therefore one you can
//! see in the file: put block tags on their own lines and content lines
//! between them.
//!
//! Templates only pick styles and arrange lines. Widths, padding and
//! truncation are computed in `render.rs`, since they need Unicode-aware
//! measuring.

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
pub const TAGS_TEMPLATE: &str = include_str!("templates/tags.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
