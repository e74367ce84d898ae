/// Normalizes a domain for use as a URL prefix
///
/// Surrounding whitespace and every trailing slash are removed so that
/// joining with `/` never produces a double slash.
///
/// # Examples
///
/// ```
/// use static_sitemap::url::normalize_domain;
///
/// assert_eq!(normalize_domain("https://example.com/"), "https://example.com");
/// assert_eq!(normalize_domain("https://example.com"), "https://example.com");
/// assert_eq!(normalize_domain("https://example.com/blog/"), "https://example.com/blog");
/// ```
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('/').to_string()
}
