//! Error types for loading and validating pagination settings.
//!
//! The widget itself never fails; only configuration can be rejected.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Items per page must be at least 1")]
    ZeroItemsPerPage,

    #[error("At least one page size option is required")]
    NoPageSizeOptions,

    #[error("Page size options must be at least 1")]
    ZeroPageSizeOption,

    #[error("Could not find home directory")]
    NoHomeDirectory,

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, PaginationError>;
