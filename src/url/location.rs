use std::path::{Component, Path};

/// Builds the public URL of a file found under the scan root
///
/// The path relative to `root` is joined with `/` regardless of the
/// platform separator and appended to `domain`, which must already be
/// normalized (see [`normalize_domain`](super::normalize_domain)).
///
/// # Returns
///
/// * `Some(String)` - The absolute URL
/// * `None` - If `path` does not live under `root`
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use static_sitemap::url::build_location;
///
/// let url = build_location(Path::new("/site"), Path::new("/site/a/b.html"), "https://example.com");
/// assert_eq!(url.as_deref(), Some("https://example.com/a/b.html"));
/// ```
pub fn build_location(root: &Path, path: &Path, domain: &str) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(format!("{}/{}", domain, relative_url_path(relative)))
}

/// Converts a relative filesystem path into a `/`-separated URL path
pub fn relative_url_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds the URL of a sitemap file as listed in the sitemap index
///
/// The output directory is appended below the domain: backslashes become
/// `/`, and empty or `.` segments are dropped so no join point carries a
/// double slash.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use static_sitemap::url::index_location;
///
/// let url = index_location("https://example.com", Path::new("./sitemaps/"), "sitemap_1.xml");
/// assert_eq!(url, "https://example.com/sitemaps/sitemap_1.xml");
/// ```
pub fn index_location(domain: &str, output_dir: &Path, file_name: &str) -> String {
    let output_dir = output_dir.to_string_lossy().replace('\\', "/");

    let mut parts = vec![domain.trim_end_matches('/')];
    parts.extend(
        output_dir
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != "."),
    );
    parts.push(file_name);
    parts.join("/")
}
