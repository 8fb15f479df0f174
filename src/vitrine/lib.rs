//! # Vitrine Architecture
//!
//! Vitrine is a **UI-agnostic collection filter**. It takes an ordered list of
//! tagged items, narrows it to one category, and pages the result ("showing
//! 6 of 10, Show 4 More Items"). The terminal client in this crate is one way
//! of driving it, not the point of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves filter settings from configuration              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, tags, browse, config, init                         │
//! │  - Returns `CmdResult`, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, sinks.rs, reveal.rs)                      │
//! │  - `CollectionFilter` state machine                         │
//! │  - Side effects only through injected sink traits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog itself comes from a [`store::CatalogStore`] (JSON file or
//! in memory).
//!
//! ## The Filter Core
//!
//! [`filter::CollectionFilter`] holds exactly two pieces of state, the
//! current selection and whether everything is shown, and recomputes the
//! visible page after each change. It never draws anything: items, counters,
//! the expand control and the filter controls are all traits from
//! [`sinks`], implemented by the host. That keeps the core testable without a
//! rendering surface and lets the same filter sit behind a terminal, a
//! browser, or a test recorder.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Diagnostics go through `tracing`;
//! whoever embeds the library decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Category filter & paginator
//! - [`sinks`]: Output traits and ready-made implementations
//! - [`reveal`]: Cancellable staggered reveal schedule
//! - [`store`]: Catalog sources
//! - [`model`]: `Item`, `Catalog`, `FilterSelection`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod reveal;
pub mod sinks;
pub mod store;
