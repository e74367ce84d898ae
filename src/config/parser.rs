use crate::config::types::SitemapConfig;
use crate::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Top-level layout of a configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sitemap: SitemapConfig,
}

/// Loads the `[sitemap]` table from a TOML configuration file
///
/// Keys that are absent keep their defaults; a file without a `[sitemap]`
/// table yields [`SitemapConfig::default`]. Full validation happens once the
/// site root and domain are known, in [`Config::new`](crate::config::Config::new).
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(SitemapConfig)` - Successfully loaded options
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use static_sitemap::config::load_sitemap_config;
///
/// let sitemap = load_sitemap_config(Path::new("sitemap.toml")).unwrap();
/// println!("Output directory: {}", sitemap.output_dir.display());
/// ```
pub fn load_sitemap_config(path: &Path) -> Result<SitemapConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_sitemap_config(&content)
}

/// Parses the `[sitemap]` table from TOML text
pub fn parse_sitemap_config(content: &str) -> Result<SitemapConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.sitemap)
}
