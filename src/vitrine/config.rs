use crate::error::{Result, VitrineError};
use crate::filter::DEFAULT_PAGE_SIZE;
use crate::reveal::DEFAULT_REVEAL_STEP;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG: &str = "catalog.json";

/// Keys accepted by [`VitrineConfig::get`] and [`VitrineConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["page-size", "reveal-step-ms", "item-noun", "catalog"];

/// Configuration for vitrine, stored in .vitrine/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitrineConfig {
    /// Items shown before the "show more" control kicks in
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Delay between successive reveals, in milliseconds
    #[serde(default = "default_reveal_step_ms")]
    pub reveal_step_ms: u64,

    /// Overrides the catalog's own noun ("Item", "Fragrance", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_noun: Option<String>,

    /// Catalog file, relative to the working directory
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_reveal_step_ms() -> u64 {
    DEFAULT_REVEAL_STEP.as_millis() as u64
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            reveal_step_ms: default_reveal_step_ms(),
            item_noun: None,
            catalog: default_catalog(),
        }
    }
}

impl VitrineConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VitrineError::Io)?;
        let config: VitrineConfig =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VitrineError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VitrineError::Serialization)?;
        fs::write(config_path, content).map_err(VitrineError::Io)?;
        Ok(())
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "reveal-step-ms" => Some(self.reveal_step_ms.to_string()),
            "item-noun" => Some(self.item_noun.clone().unwrap_or_default()),
            "catalog" => Some(self.catalog.clone()),
            _ => None,
        }
    }

    /// Sets a key from its string form. Invalid values leave the config
    /// untouched.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid page-size: {}", value))?;
                if size == 0 {
                    return Err("page-size must be at least 1".to_string());
                }
                self.page_size = size;
            }
            "reveal-step-ms" => {
                self.reveal_step_ms = value
                    .parse()
                    .map_err(|_| format!("Invalid reveal-step-ms: {}", value))?;
            }
            "item-noun" => {
                let noun = value.trim();
                self.item_noun = if noun.is_empty() {
                    None
                } else {
                    Some(noun.to_string())
                };
            }
            "catalog" => {
                if value.trim().is_empty() {
                    return Err("catalog cannot be empty".to_string());
                }
                self.catalog = value.to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their current values, in a stable order.
    pub fn entries(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}
