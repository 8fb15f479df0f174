//! # Rendering Module
//!
//! Turns `CmdResult`s into terminal text through the templates in
//! `templates.rs` and the styles in `styles.rs`.
//!
//! ## Design Philosophy
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! require Unicode-aware processing. Templates handle presentation:
//! - style selection (the active control, message levels)
//! - line arrangement and blank lines
//! - optional sections (the expand label, the empty-page note)

use super::styles::{self, names};
use super::templates::{CONFIG_TEMPLATE, MESSAGES_TEMPLATE, PAGE_TEMPLATE, TAGS_TEMPLATE};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use vitrine::api::{CmdMessage, CmdResult, MessageLevel};
use vitrine::config::VitrineConfig;
use vitrine::model::TagCount;

/// Names wider than this are truncated with an ellipsis.
pub const NAME_WIDTH: usize = 40;
pub const ELLIPSIS: char = '…';

#[derive(Serialize)]
struct ControlData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ItemLineData {
    position: String,
    name: String,
    padding: String,
    tags: String,
}

#[derive(Serialize)]
struct PageData {
    controls: Vec<ControlData>,
    items: Vec<ItemLineData>,
    empty: bool,
    empty_message: String,
    showing: usize,
    total: usize,
    expand_label: Option<String>,
}

#[derive(Serialize)]
struct TagLineData {
    name: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct TagsData {
    tags: Vec<TagLineData>,
    empty: bool,
}

#[derive(Serialize)]
struct ConfigEntryData {
    key: String,
    padding: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntryData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    environment(use_color)
        .render_str(template, data)
        .map(|mut out| {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out
        })
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the filter bar, the visible items and the counters of a
/// list or browse result. Results without a summary render as nothing.
pub fn render_page(result: &CmdResult, use_color: bool) -> String {
    let Some(summary) = &result.summary else {
        return String::new();
    };

    let controls = result
        .controls
        .iter()
        .map(|control| {
            if control.active {
                ControlData {
                    label: format!("[{}]", control.label),
                    style: names::CONTROL_ACTIVE,
                }
            } else {
                ControlData {
                    label: control.label.clone(),
                    style: names::CONTROL,
                }
            }
        })
        .collect();

    let position_width = result
        .listed_items
        .last()
        .map(|d| d.position.to_string().len())
        .unwrap_or(1);
    let item_names: Vec<String> = result
        .listed_items
        .iter()
        .map(|d| truncate_to_width(&d.item.name, NAME_WIDTH))
        .collect();
    let name_width = item_names.iter().map(|n| n.width()).max().unwrap_or(0);

    let items = result
        .listed_items
        .iter()
        .zip(item_names)
        .map(|(display, name)| ItemLineData {
            position: format!("{:>width$}.", display.position, width = position_width),
            padding: " ".repeat(name_width.saturating_sub(name.width())),
            name,
            tags: display.item.tags.join(", "),
        })
        .collect::<Vec<_>>();

    let data = PageData {
        controls,
        empty: items.is_empty(),
        items,
        empty_message: format!("No {}s to show.", summary.noun.to_lowercase()),
        showing: summary.showing,
        total: summary.total,
        expand_label: summary.expand_label.clone(),
    };

    render(PAGE_TEMPLATE, &data, use_color)
}

/// Renders tag names with how many items carry each.
pub fn render_tags(tags: &[TagCount], use_color: bool) -> String {
    let width = tags.iter().map(|t| t.tag.width()).max().unwrap_or(0);
    let data = TagsData {
        tags: tags
            .iter()
            .map(|t| TagLineData {
                name: t.tag.clone(),
                padding: " ".repeat(width - t.tag.width()),
                count: t.count,
            })
            .collect(),
        empty: tags.is_empty(),
    };

    render(TAGS_TEMPLATE, &data, use_color)
}

/// Renders every config key as `key = value`.
pub fn render_config(config: &VitrineConfig, use_color: bool) -> String {
    let entries = config.entries();
    let width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = ConfigData {
        entries: entries
            .into_iter()
            .map(|(key, value)| {
                let (value, style) = if value.is_empty() {
                    ("(unset)".to_string(), names::MUTED)
                } else {
                    (value, names::VALUE)
                };
                ConfigEntryData {
                    padding: " ".repeat(width - key.width()),
                    key,
                    value,
                    style,
                }
            })
            .collect(),
    };

    render(CONFIG_TEMPLATE, &data, use_color)
}

/// Renders command messages, one per line, styled by level.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vitrine::api::{FilterSettings, VitrineApi, VitrinePaths};
    use vitrine::model::{Catalog, Item};
    use vitrine::store::memory::InMemoryCatalog;

    fn api() -> VitrineApi<InMemoryCatalog> {
        let items = vec![
            Item::new("cedar", "Cedar Smoke", ["woody"]),
            Item::new("rose", "Rose Noir", ["floral"]),
            Item::new("vetiver", "Vetiver Dusk", ["woody", "citrus"]),
            Item::new("oud", "Oud Ember", ["woody"]),
            Item::new("jasmine", "Night Jasmine", ["floral"]),
            Item::new("yuzu", "Yuzu Bark", ["woody", "citrus"]),
            Item::new("peony", "Peony Veil", ["floral"]),
            Item::new("sandal", "Sandalwood", ["woody"]),
            Item::new("pine", "Pine Resin", ["woody"]),
            Item::new("iris", "Iris Powder", ["floral"]),
        ];
        let store = InMemoryCatalog::new(Catalog::new(items).with_noun("Fragrance"));
        let paths = VitrinePaths {
            project: None,
            global: PathBuf::from("unused"),
        };
        VitrineApi::new(store, paths, FilterSettings::default())
    }

    #[test]
    fn page_lists_first_page_with_expand_label() {
        let result = api().list("all", false).unwrap();
        let out = render_page(&result, false);

        assert!(out.starts_with("[All]  woody  floral  citrus\n\n"));
        assert!(out.contains("1. Cedar Smoke    woody\n"));
        assert!(out.contains("3. Vetiver Dusk   woody, citrus\n"));
        assert!(out.contains("5. Night Jasmine  floral\n"));
        assert!(!out.contains("Peony Veil"));
        assert!(out.ends_with("\nShowing 6 of 10\nShow 4 More Fragrances\n"));
    }

    #[test]
    fn page_without_more_has_no_expand_label() {
        let result = api().list("floral", false).unwrap();
        let out = render_page(&result, false);

        assert!(out.starts_with("All  woody  [floral]  citrus\n"));
        assert!(out.contains("4. Iris Powder"));
        assert!(out.ends_with("Showing 4 of 4\n"));
        assert!(!out.contains("More"));
    }

    #[test]
    fn expanded_page_right_aligns_positions() {
        let result = api().list("all", true).unwrap();
        let out = render_page(&result, false);

        assert!(out.contains(" 1. Cedar Smoke"));
        assert!(out.contains("10. Iris Powder"));
        assert!(out.contains("Showing 10 of 10\n"));
        assert!(!out.contains("Show 0"));
    }

    #[test]
    fn unknown_tag_renders_empty_note() {
        let result = api().list("musk", false).unwrap();
        let out = render_page(&result, false);

        assert!(out.contains("No fragrances to show.\n"));
        assert!(out.contains("Showing 0 of 0"));
    }

    #[test]
    fn result_without_summary_renders_nothing() {
        assert_eq!(render_page(&CmdResult::default(), false), "");
    }

    #[test]
    fn tags_are_aligned() {
        let tags = vec![
            TagCount {
                tag: "woody".into(),
                count: 6,
            },
            TagCount {
                tag: "citrus".into(),
                count: 2,
            },
        ];
        assert_eq!(render_tags(&tags, false), "woody   6\ncitrus  2\n");
    }

    #[test]
    fn empty_tags_say_so() {
        assert_eq!(render_tags(&[], false), "No tags in this catalog.\n");
    }

    #[test]
    fn config_shows_every_key() {
        let out = render_config(&VitrineConfig::default(), false);
        assert!(out.contains("page-size      = 6\n"));
        assert!(out.contains("reveal-step-ms = 50\n"));
        assert!(out.contains("item-noun      = (unset)\n"));
        assert!(out.contains("catalog        = catalog.json\n"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![CmdMessage::success("done"), CmdMessage::error("bad")];
        assert_eq!(render_messages(&messages, false), "done\nbad\n");
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn colored_messages_carry_escapes() {
        let out = render_messages(&[CmdMessage::warning("careful")], true);
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate_to_width("Sandalwood", 20), "Sandalwood");
        assert_eq!(truncate_to_width("Sandalwood", 6), "Sanda…");
        assert_eq!(truncate_to_width("Sandal", 6), "Sandal");
    }
}
