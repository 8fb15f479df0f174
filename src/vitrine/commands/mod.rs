use crate::config::VitrineConfig;
use crate::error::{Result, VitrineError};
use crate::filter::{CollectionFilter, DEFAULT_PAGE_SIZE};
use crate::model::{Catalog, FilterSelection, Item, Scope, TagCount};
use crate::reveal::DEFAULT_REVEAL_STEP;
use crate::sinks::{Control, ControlGroup, Counter, ExpandButton, ItemSlot};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub mod browse;
pub mod config;
pub mod init;
pub mod list;
pub mod tags;

#[derive(Debug, Clone)]
pub struct VitrinePaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl VitrinePaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| VitrineError::Config("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

/// The parts of the configuration a filter is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    pub page_size: usize,
    pub reveal_step: Duration,
    /// Replaces the catalog's noun when set
    pub noun: Option<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            reveal_step: DEFAULT_REVEAL_STEP,
            noun: None,
        }
    }
}

impl From<&VitrineConfig> for FilterSettings {
    fn from(config: &VitrineConfig) -> Self {
        Self {
            page_size: config.page_size,
            reveal_step: config.reveal_step(),
            noun: config.item_noun.clone(),
        }
    }
}

/// A catalog wired to a [`CollectionFilter`] with every sink attached, the
/// handles kept so the results can be read back.
pub(crate) struct Showcase {
    pub filter: CollectionFilter<ItemSlot>,
    pub showing: Counter,
    pub total: Counter,
    pub expand: ExpandButton,
    pub controls: ControlGroup,
}

impl Showcase {
    pub fn new(catalog: Catalog, settings: &FilterSettings) -> Self {
        let noun = settings
            .noun
            .clone()
            .unwrap_or_else(|| catalog.noun.clone());
        let tags: Vec<String> = catalog.tag_counts().into_iter().map(|t| t.tag).collect();

        let showing = Counter::new();
        let total = Counter::new();
        let expand = ExpandButton::new();
        let controls = ControlGroup::for_tags(&tags);

        let slots: Vec<ItemSlot> = catalog.items.into_iter().map(ItemSlot::new).collect();
        let filter = CollectionFilter::builder(slots)
            .page_size(settings.page_size)
            .reveal_step(settings.reveal_step)
            .noun(noun)
            .showing_counter(showing.clone())
            .total_counter(total.clone())
            .expand_control(expand.clone())
            .controls(controls.clone())
            .build();

        Self {
            filter,
            showing,
            total,
            expand,
            controls,
        }
    }

    /// Reads the current state back from the sinks.
    pub fn snapshot(&self) -> CmdResult {
        let listed = self
            .filter
            .items()
            .iter()
            .filter(|slot| slot.visible)
            .enumerate()
            .map(|(i, slot)| DisplayItem {
                position: i + 1,
                item: slot.item.clone(),
            })
            .collect();

        let expand = self.expand.state();
        let summary = FilterSummary {
            selection: self.filter.selection().clone(),
            showing: self.showing.get(),
            total: self.total.get(),
            showing_all: self.filter.showing_all(),
            expand_label: expand.visible.then_some(expand.label),
            noun: self.filter.noun().to_string(),
        };

        CmdResult::default()
            .with_listed_items(listed)
            .with_summary(summary)
            .with_controls(self.controls.controls())
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item on display, with its 1-based position on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub position: usize,
    pub item: Item,
}

/// What the counters and the expand control say after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub selection: FilterSelection,
    pub showing: usize,
    pub total: usize,
    pub showing_all: bool,
    /// Present only while the expand control is visible
    pub expand_label: Option<String>,
    pub noun: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<DisplayItem>,
    pub summary: Option<FilterSummary>,
    pub controls: Vec<Control>,
    pub tags: Vec<TagCount>,
    pub config: Option<VitrineConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_summary(mut self, summary: FilterSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_controls(mut self, controls: Vec<Control>) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagCount>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: VitrineConfig) -> Self {
        self.config = Some(config);
        self
    }
}
