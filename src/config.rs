//! Configuration for the pagination widgets in the demo.
//!
//! Loaded from `~/.config/egui-pagination/config.json`; a missing file yields
//! the defaults. `PAGINATION_ITEMS_PER_PAGE` overrides the file.
//!
//! ```json
//! {
//!   "items_per_page": 10,
//!   "page_size_options": [5, 10, 20, 50]
//! }
//! ```

use crate::error::{PaginationError, Result};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ITEMS_PER_PAGE_ENV: &str = "PAGINATION_ITEMS_PER_PAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial page size for every widget
    pub items_per_page: usize,
    /// Sizes offered by the page-size selector
    pub page_size_options: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::get_config_path()?)?;
        config.apply_env_override(std::env::var(ITEMS_PER_PAGE_ENV).ok().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| PaginationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(PaginationError::NoHomeDirectory)?;
        Ok(home.join(".config").join("egui-pagination").join("config.json"))
    }

    pub fn apply_env_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(value) = value {
            self.items_per_page = value.trim().parse().map_err(|_| PaginationError::InvalidEnv {
                name: ITEMS_PER_PAGE_ENV,
                value: value.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(PaginationError::ZeroItemsPerPage);
        }
        if self.page_size_options.is_empty() {
            return Err(PaginationError::NoPageSizeOptions);
        }
        if self.page_size_options.contains(&0) {
            return Err(PaginationError::ZeroPageSizeOption);
        }
        Ok(())
    }
}
