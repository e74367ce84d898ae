//! Run summary
//!
//! This module collects what a generation run did and prints the console
//! report.

use crate::date::DateSource;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// HTML files that passed the filter and were processed
    pub files_scanned: u64,

    /// URLs written across all sitemap files
    pub urls_emitted: u64,

    /// Sitemap files produced
    pub sitemap_files: Vec<PathBuf>,

    /// Path of the sitemap index
    pub index_path: PathBuf,

    /// Entries per date strategy
    pub date_sources: BTreeMap<DateSource, u64>,

    /// Entries with no last-modified date at all
    pub undated: u64,

    /// HTML files dropped by the exclusion filter
    pub excluded: u64,

    /// Directory entries skipped because they could not be read
    pub skipped: u64,
}

impl GenerationSummary {
    /// Number of sitemap files produced
    pub fn sitemap_count(&self) -> usize {
        self.sitemap_files.len()
    }

    /// Records the source of one resolved date
    pub fn record_date(&mut self, source: Option<DateSource>) {
        match source {
            Some(source) => *self.date_sources.entry(source).or_insert(0) += 1,
            None => self.undated += 1,
        }
    }
}

/// Prints the summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &GenerationSummary) {
    println!("Sitemap Generation Summary:");
    println!(
        "Total HTML files scanned (after filtering): {}",
        summary.files_scanned
    );
    println!("Total URLs added to sitemaps: {}", summary.urls_emitted);
    println!(
        "Number of sitemap files generated: {}",
        summary.sitemap_count()
    );
    println!(
        "Sitemap index file created at: {}",
        summary.index_path.display()
    );

    if !summary.date_sources.is_empty() || summary.undated > 0 {
        println!();
        println!("Last-modified sources:");
        for source in DateSource::ALL {
            if let Some(count) = summary.date_sources.get(&source) {
                println!("  {}: {}", source, count);
            }
        }
        if summary.undated > 0 {
            println!("  none: {}", summary.undated);
        }
    }

    if summary.excluded > 0 || summary.skipped > 0 {
        println!();
        println!("Excluded by filter: {}", summary.excluded);
        println!("Unreadable entries skipped: {}", summary.skipped);
    }
}
