//! # CLI Behavior
//!
//! This is **one possible UI client** for vitrine. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`vitrine`)
//!
//! Running `vitrine` with no arguments is `vitrine list all`: the first page
//! of the whole catalog.
//!
//! ## Catalog Resolution
//!
//! 1. `--catalog <PATH>`
//! 2. the `catalog` key of the active config scope
//! 3. `catalog.json` in the working directory (the config default)
//!
//! ## Browse
//!
//! `vitrine browse` keeps one filter alive and reads commands from stdin, one
//! per line, so it works both interactively and piped
//! (`printf 'floral\nmore\n' | vitrine browse`).

mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
