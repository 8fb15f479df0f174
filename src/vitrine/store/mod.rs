//! # Catalog Storage
//!
//! The collection a filter runs over comes from a [`CatalogStore`]. Keeping
//! the source behind a trait lets commands run against an in-memory catalog
//! in tests and against a JSON file in the CLI.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: reads a catalog JSON file
//! - [`memory::InMemoryCatalog`]: holds a catalog in memory, for testing
//!
//! ## File Format
//!
//! ```text
//! {
//!   "noun": "Fragrance",
//!   "items": [
//!     { "id": "rose-noir", "name": "Rose Noir", "tags": ["floral", "night"] },
//!     { "id": "cedar", "name": "Cedar Smoke", "tags": "woody smoky" }
//!   ]
//! }
//! ```
//!
//! Tags may be a list or a whitespace separated string.

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Source of the item collection.
pub trait CatalogStore {
    /// Loads the full catalog, items in display order.
    fn load(&self) -> Result<Catalog>;
}
