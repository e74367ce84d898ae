use crate::config::types::{Config, SiteConfig, SitemapConfig};
use crate::ConfigError;
use url::Url;

/// Per-file URL ceiling set by the sitemaps.org protocol
pub const PROTOCOL_MAX_URLS: usize = 50_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_sitemap_config(&config.sitemap)?;
    Ok(())
}

/// Validates the scan root and public domain
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if !config.root.is_dir() {
        return Err(ConfigError::Validation(format!(
            "scan directory '{}' does not exist or is not a directory; \
             a missing root is rejected instead of producing an empty sitemap index",
            config.root.display()
        )));
    }

    validate_domain(&config.domain)
}

/// Validates sitemap layout options
fn validate_sitemap_config(config: &SitemapConfig) -> Result<(), ConfigError> {
    if config.max_urls < 1 {
        return Err(ConfigError::Validation(format!(
            "max_urls must be >= 1, got {}",
            config.max_urls
        )));
    }

    if config.max_urls > PROTOCOL_MAX_URLS {
        tracing::warn!(
            "max_urls {} exceeds the sitemap protocol limit of {} URLs per file",
            config.max_urls,
            PROTOCOL_MAX_URLS
        );
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.exclude.iter().any(|pattern| pattern.is_empty()) {
        return Err(ConfigError::Validation(
            "exclude patterns cannot be empty strings".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the domain is an absolute HTTP(S) URL with a host
fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    let url = Url::parse(domain)
        .map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid domain '{}': {}; the domain must be an absolute URL such as \
                 https://example.com, it is not joined onto paths as plain text",
                domain, e
            ))
        })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Domain '{}' must use the http or https scheme",
            domain
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!(
            "Domain '{}' has no host",
            domain
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "Domain '{}' cannot carry a query or fragment",
            domain
        )));
    }

    Ok(())
}
