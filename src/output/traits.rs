//! Output handler trait
//!
//! The generator hands every rendered document to an [`OutputHandler`],
//! which decides where it ends up.

use crate::sitemap::{SitemapFile, SitemapIndex};
use crate::OutputResult;
use std::path::PathBuf;

/// Trait for output handlers
pub trait OutputHandler {
    /// Stores one sitemap file
    ///
    /// # Returns
    ///
    /// The path the document was (or would be) written to
    fn write_sitemap(&self, file: &SitemapFile) -> OutputResult<PathBuf>;

    /// Stores the sitemap index
    ///
    /// # Returns
    ///
    /// The path the index was (or would be) written to
    fn write_index(&self, index: &SitemapIndex) -> OutputResult<PathBuf>;
}
