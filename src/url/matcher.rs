/// Checks whether a URL contains any exclusion pattern
///
/// Matching is a case-insensitive substring test against the full URL,
/// domain included.
///
/// # Arguments
///
/// * `url` - The absolute URL to check
/// * `patterns` - Substrings that exclude a URL, e.g. `"/user/"`
///
/// # Examples
///
/// ```
/// use static_sitemap::url::is_excluded;
///
/// let patterns = vec!["/user/".to_string()];
/// assert!(is_excluded("https://example.com/User/Profile.html", &patterns));
/// assert!(!is_excluded("https://example.com/users.html", &patterns));
/// ```
pub fn is_excluded(url: &str, patterns: &[String]) -> bool {
    let url = url.to_lowercase();
    patterns
        .iter()
        .any(|pattern| url.contains(&pattern.to_lowercase()))
}
