use super::CatalogStore;
use crate::error::Result;
use crate::model::{Catalog, Item};

/// In-memory catalog for testing and development.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self::new(Catalog::new(items))
    }
}

impl CatalogStore for InMemoryCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

// --- Test Fixtures ---
