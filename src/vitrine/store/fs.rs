use super::CatalogStore;
use crate::error::{Result, VitrineError};
use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(VitrineError::Catalog(format!(
                "Catalog file not found: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(VitrineError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        debug!(
            path = %self.path.display(),
            items = catalog.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
