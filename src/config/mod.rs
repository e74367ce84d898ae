//! Configuration module for Static-Sitemap
//!
//! This module assembles the run configuration from command-line values and
//! an optional TOML file, then validates it.
//!
//! # Example
//!
//! ```no_run
//! use static_sitemap::config::{load_sitemap_config, Config};
//! use std::path::Path;
//!
//! let sitemap = load_sitemap_config(Path::new("sitemap.toml")).unwrap();
//! let config = Config::new("public", "https://example.com", sitemap).unwrap();
//! println!("URLs per sitemap: {}", config.sitemap.max_urls);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, SitemapConfig, SiteConfig, DEFAULT_EXCLUDE, DEFAULT_MAX_URLS, DEFAULT_OUTPUT_DIR,
};

// Re-export parser functions
pub use parser::{load_sitemap_config, parse_sitemap_config};
pub use validation::{validate, PROTOCOL_MAX_URLS};
