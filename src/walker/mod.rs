//! Directory walker for Static-Sitemap
//!
//! Lazily enumerates the HTML files under a scan root that qualify for the
//! sitemap. A file qualifies when it is a regular file whose name ends in
//! `.html` (any case) and whose public URL matches no exclusion pattern.
//!
//! Directories are visited depth-first with entries sorted by file name.
//! Entries that cannot be read (permission errors, races with deletion) are
//! skipped with a warning; they never abort the walk.

use crate::url::{build_location, is_excluded};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extension that marks a page, compared case-insensitively
const HTML_SUFFIX: &str = ".html";

/// A qualifying HTML file together with its public URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFile {
    /// Filesystem path of the file
    pub path: PathBuf,

    /// Absolute URL the file is published under
    pub location: String,
}

/// Counters describing what the walk left out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// HTML files dropped by the exclusion filter
    pub excluded: u64,

    /// Directory entries that could not be read
    pub skipped: u64,
}

/// Iterator over the qualifying HTML files below a root directory
pub struct HtmlWalker<'a> {
    entries: walkdir::IntoIter,
    root: PathBuf,
    domain: &'a str,
    exclude: &'a [String],
    stats: WalkStats,
}

impl<'a> HtmlWalker<'a> {
    /// Creates a walker over `root`
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to scan
    /// * `domain` - Normalized domain the URLs are built on
    /// * `exclude` - Case-insensitive URL substrings to drop
    pub fn new(root: &Path, domain: &'a str, exclude: &'a [String]) -> Self {
        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            entries,
            root: root.to_path_buf(),
            domain,
            exclude,
            stats: WalkStats::default(),
        }
    }

    /// Returns the counters accumulated so far
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Turns a directory entry into an [`HtmlFile`] if it qualifies
    fn qualify(&mut self, entry: DirEntry) -> Option<HtmlFile> {
        if !is_regular_file(&entry) || !has_html_suffix(&entry) {
            return None;
        }

        let location = build_location(&self.root, entry.path(), self.domain)?;

        if is_excluded(&location, self.exclude) {
            tracing::debug!("Excluding {}", location);
            self.stats.excluded += 1;
            return None;
        }

        Some(HtmlFile {
            path: entry.into_path(),
            location,
        })
    }
}

impl Iterator for HtmlWalker<'_> {
    type Item = HtmlFile;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entries.next()? {
                Ok(entry) => {
                    if let Some(file) = self.qualify(entry) {
                        return Some(file);
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    tracing::warn!("Skipping unreadable entry {}: {}", path, e);
                    self.stats.skipped += 1;
                }
            }
        }
    }
}

/// Returns true for regular files and for symlinks that resolve to one
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn has_html_suffix(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(HTML_SUFFIX)
}
