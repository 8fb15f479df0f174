//! Interactive browsing: one long-lived filter driven by typed commands.
//!
//! Unlike `list`, which builds a filter, applies one selection and throws it
//! away, a [`Session`] keeps its filter across inputs, so `more` expands the
//! page the user is looking at and a new filter collapses it again.

use crate::commands::{CmdMessage, CmdResult, FilterSettings, Showcase};
use crate::error::Result;
use crate::model::{FilterSelection, ALL_FILTER};
use crate::store::CatalogStore;
use std::str::FromStr;
use std::time::Duration;

pub const HELP: &str = "\
<tag> | filter <tag>   show items tagged <tag>
all                    show everything
more                   show the rest of the current selection
help                   this message
quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Filter(String),
    More,
    Show,
    Help,
    Quit,
}

impl FromStr for BrowseAction {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(BrowseAction::Show);
        };
        let rest: Vec<&str> = words.collect();

        match (first, rest.as_slice()) {
            ("quit" | "q" | "exit", []) => Ok(BrowseAction::Quit),
            ("more" | "m" | "+", []) => Ok(BrowseAction::More),
            ("help" | "h" | "?", []) => Ok(BrowseAction::Help),
            ("filter" | "f", [tag]) => Ok(BrowseAction::Filter(tag.to_string())),
            ("filter" | "f", []) => Err(format!("{} needs a tag", first)),
            (tag, []) => Ok(BrowseAction::Filter(tag.to_string())),
            _ => Err(format!("Unknown command: {}", line.trim())),
        }
    }
}

pub struct Session {
    showcase: Showcase,
}

/// Loads the catalog and opens a session on its first page.
pub fn start<S: CatalogStore>(store: &S, settings: &FilterSettings) -> Result<Session> {
    let catalog = store.load()?;
    Ok(Session {
        showcase: Showcase::new(catalog, settings),
    })
}

impl Session {
    /// Applies one action. Returns `None` once the user quits.
    pub fn apply(&mut self, action: &BrowseAction) -> Option<CmdResult> {
        let filter = &mut self.showcase.filter;
        match action {
            BrowseAction::Quit => return None,
            BrowseAction::Help => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info(HELP));
                return Some(result);
            }
            BrowseAction::Filter(tag) => filter.set_filter(tag.as_str()),
            BrowseAction::More => {
                let had_more = self.showcase.expand.is_visible();
                filter.expand();
                if !had_more {
                    let mut result = self.snapshot();
                    result.add_message(CmdMessage::info("Nothing more to show."));
                    return Some(result);
                }
            }
            BrowseAction::Show => {}
        }
        Some(self.snapshot())
    }

    /// Parses and applies one input line. Parse errors come back as an
    /// error message; the session itself is left untouched.
    pub fn apply_line(&mut self, line: &str) -> Option<CmdResult> {
        match line.parse::<BrowseAction>() {
            Ok(action) => self.apply(&action),
            Err(e) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                Some(result)
            }
        }
    }

    pub fn snapshot(&self) -> CmdResult {
        self.showcase.snapshot()
    }

    pub fn advance(&mut self, dt: Duration) -> usize {
        self.showcase.filter.advance(dt)
    }

    pub fn reveal_all(&mut self) -> usize {
        self.showcase.filter.reveal_all()
    }

    pub fn selection(&self) -> &FilterSelection {
        self.showcase.filter.selection()
    }

    pub fn showing_all(&self) -> bool {
        self.showcase.filter.showing_all()
    }

    /// Labels a user can type, "all" first.
    pub fn filter_names(&self) -> Vec<String> {
        std::iter::once(ALL_FILTER.to_string())
            .chain(
                self.showcase
                    .controls
                    .controls()
                    .into_iter()
                    .filter(|c| !c.selection.is_all())
                    .map(|c| c.selection.as_str().to_string()),
            )
            .collect()
    }
}
