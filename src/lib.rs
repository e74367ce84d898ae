//! Static-Sitemap: sitemap generation for offline HTML sites
//!
//! This crate walks a directory of pre-rendered HTML files and produces
//! sitemaps.org-compliant sitemap files plus a sitemap index. The run is a
//! single forward pipeline:
//!
//! ```text
//! walker  →  date  →  sitemap::paginate  →  output
//! ```
//!
//! The [`generator`] module wires the stages together.

pub mod config;
pub mod date;
pub mod generator;
pub mod output;
pub mod sitemap;
pub mod url;
pub mod walker;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Static-Sitemap operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while rendering or writing sitemap documents
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render XML: {0}")]
    Xml(String),
}

/// Result type alias for Static-Sitemap operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::Config;
pub use date::{DateResolver, DateSource};
pub use generator::generate;
pub use output::GenerationSummary;
pub use sitemap::{SitemapFile, SitemapIndex, UrlEntry};
