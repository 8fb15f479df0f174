//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every vitrine operation, whatever the UI.
//!
//! It dispatches to the matching command, hands it the filter settings
//! resolved from configuration, and returns structured `Result<CmdResult>`
//! values. It holds no business logic, performs no output and formats no
//! strings.
//!
//! `VitrineApi<S: CatalogStore>` is generic over the catalog source:
//! `FileCatalog` in the CLI, `InMemoryCatalog` in tests.

use crate::commands;
use crate::commands::browse::Session;
use crate::error::Result;
use crate::model::Scope;
use crate::store::CatalogStore;

/// The main API facade for vitrine operations.
pub struct VitrineApi<S: CatalogStore> {
    store: S,
    paths: commands::VitrinePaths,
    settings: commands::FilterSettings,
}

impl<S: CatalogStore> VitrineApi<S> {
    pub fn new(
        store: S,
        paths: commands::VitrinePaths,
        settings: commands::FilterSettings,
    ) -> Self {
        Self {
            store,
            paths,
            settings,
        }
    }

    pub fn list(&self, filter: &str, show_all: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.settings, filter, show_all)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn browse(&self) -> Result<Session> {
        commands::browse::start(&self.store, &self.settings)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::VitrinePaths {
        &self.paths
    }

    pub fn settings(&self) -> &commands::FilterSettings {
        &self.settings
    }
}

pub use crate::commands::browse::BrowseAction;
pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, DisplayItem, FilterSettings, FilterSummary, MessageLevel, VitrinePaths,
};
