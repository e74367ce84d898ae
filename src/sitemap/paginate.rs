use crate::sitemap::model::{SitemapFile, UrlEntry};
use std::num::NonZeroUsize;

/// Name of the `k`-th sitemap file (1-based)
pub fn sitemap_file_name(k: usize) -> String {
    format!("sitemap_{}.xml", k)
}

/// Splits entries into sitemap files of at most `max_urls` entries each
///
/// Produces `ceil(N / max_urls)` files, none for an empty list. Order is
/// preserved and the files concatenate back to `entries` exactly.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use static_sitemap::sitemap::{paginate, UrlEntry};
///
/// let entries: Vec<_> = (0..5)
///     .map(|i| UrlEntry::new(format!("https://example.com/{i}.html"), None))
///     .collect();
/// let files = paginate(entries, NonZeroUsize::new(2).unwrap());
///
/// assert_eq!(files.len(), 3);
/// assert_eq!(files[2].file_name, "sitemap_3.xml");
/// assert_eq!(files[2].entries.len(), 1);
/// ```
pub fn paginate(entries: Vec<UrlEntry>, max_urls: NonZeroUsize) -> Vec<SitemapFile> {
    let max_urls = max_urls.get();
    let mut files = Vec::with_capacity(entries.len().div_ceil(max_urls));
    let mut remaining = entries.into_iter().peekable();

    while remaining.peek().is_some() {
        let chunk: Vec<UrlEntry> = remaining.by_ref().take(max_urls).collect();
        files.push(SitemapFile {
            file_name: sitemap_file_name(files.len() + 1),
            entries: chunk,
        });
    }

    files
}
