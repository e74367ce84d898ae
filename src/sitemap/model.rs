use crate::url::index_location;
use chrono::NaiveDateTime;
use std::path::Path;

/// Fixed name of the sitemap index document
pub const INDEX_FILE_NAME: &str = "sitemap_index.xml";

/// A single `<url>` entry of a sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Absolute page URL
    pub location: String,

    /// Last modification time, if one could be determined
    pub last_modified: Option<NaiveDateTime>,
}

impl UrlEntry {
    pub fn new(location: impl Into<String>, last_modified: Option<NaiveDateTime>) -> Self {
        Self {
            location: location.into(),
            last_modified,
        }
    }
}

/// One output sitemap document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapFile {
    /// File name inside the output directory, e.g. `sitemap_1.xml`
    pub file_name: String,

    /// Entries in walk order; never empty
    pub entries: Vec<UrlEntry>,
}

/// A `<sitemap>` entry of the index document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub location: String,
    pub last_modified: NaiveDateTime,
}

/// The sitemap index document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapIndex {
    pub entries: Vec<IndexEntry>,
}

impl SitemapIndex {
    /// Builds the index for `files`
    ///
    /// Every entry shares the same `generated_at` timestamp.
    ///
    /// # Arguments
    ///
    /// * `files` - The sitemap files, in generation order
    /// * `domain` - Normalized public domain
    /// * `output_dir` - Directory the files are published under, relative to the domain
    /// * `generated_at` - Generation time of this run
    pub fn new(
        files: &[SitemapFile],
        domain: &str,
        output_dir: &Path,
        generated_at: NaiveDateTime,
    ) -> Self {
        let entries = files
            .iter()
            .map(|file| IndexEntry {
                location: index_location(domain, output_dir, &file.file_name),
                last_modified: generated_at,
            })
            .collect();

        Self { entries }
    }
}
