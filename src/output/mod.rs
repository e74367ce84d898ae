//! Output module for writing sitemaps and reporting runs
//!
//! This module handles:
//! - Rendering sitemap and sitemap index XML
//! - Writing documents to the output directory (or only reporting them)
//! - Summarizing a generation run

pub mod stats;
mod traits;
mod writer;
pub mod xml;

pub use stats::{print_summary, GenerationSummary};
pub use traits::OutputHandler;
pub use writer::{DryRunOutput, FileOutput};
pub use xml::{render_index, render_sitemap, SITEMAP_NAMESPACE};
