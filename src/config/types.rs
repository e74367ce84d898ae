use crate::config::validation::validate;
use crate::url::normalize_domain;
use crate::ConfigResult;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default number of URLs written to a single sitemap file
pub const DEFAULT_MAX_URLS: usize = 1000;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "sitemaps";

/// URL substrings that are always excluded, whatever the configuration adds
pub const DEFAULT_EXCLUDE: &[&str] = &["/user/"];

/// Main configuration structure for a sitemap run
#[derive(Debug, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub sitemap: SitemapConfig,
}

impl Config {
    /// Builds and validates a configuration for scanning `root` and
    /// publishing under `domain`
    pub fn new(
        root: impl AsRef<Path>,
        domain: &str,
        sitemap: SitemapConfig,
    ) -> ConfigResult<Self> {
        let config = Self {
            site: SiteConfig {
                root: root.as_ref().to_path_buf(),
                domain: normalize_domain(domain),
            },
            sitemap,
        };
        validate(&config)?;
        Ok(config)
    }
}

/// The site being mapped
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory scanned for HTML files
    pub root: PathBuf,

    /// Public root URL, without a trailing slash
    pub domain: String,
}

/// Sitemap layout options, loadable from the `[sitemap]` table of a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Maximum number of URLs per sitemap file
    #[serde(rename = "max-urls")]
    pub max_urls: usize,

    /// Directory the sitemap files and index are written to
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,

    /// Case-insensitive URL substrings that exclude a page, in addition to
    /// [`DEFAULT_EXCLUDE`]
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            max_urls: DEFAULT_MAX_URLS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            exclude: Vec::new(),
        }
    }
}

impl SitemapConfig {
    /// Applies command-line overrides on top of file or default values
    pub fn with_overrides(mut self, max_urls: Option<usize>, output_dir: Option<PathBuf>) -> Self {
        if let Some(max_urls) = max_urls {
            self.max_urls = max_urls;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    /// Every pattern the walk filters on: the built-in ones followed by the
    /// configured ones, without case-insensitive duplicates
    pub fn exclude_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect();
        for pattern in &self.exclude {
            if !patterns.iter().any(|p| p.eq_ignore_ascii_case(pattern)) {
                patterns.push(pattern.clone());
            }
        }
        patterns
    }
}
