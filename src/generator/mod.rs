//! Sitemap generation pipeline
//!
//! This module runs the walk → resolve → paginate → write sequence once,
//! holding the entry list in memory between stages.

mod pipeline;

pub use pipeline::{CollectedEntries, Generator};

use crate::config::Config;
use crate::output::{GenerationSummary, OutputHandler};
use crate::SitemapError;

/// Runs a complete generation with the local wall clock
///
/// This is the main entry point. It will:
/// 1. Walk the scan root for qualifying HTML files
/// 2. Resolve a last-modified date for each
/// 3. Split the entries into sitemap files
/// 4. Hand every sitemap and the index to `output`
///
/// # Arguments
///
/// * `config` - The validated run configuration
/// * `output` - Where rendered documents go
///
/// # Returns
///
/// * `Ok(GenerationSummary)` - What the run produced
/// * `Err(SitemapError)` - Writing an output document failed
pub fn generate(
    config: &Config,
    output: &dyn OutputHandler,
) -> Result<GenerationSummary, SitemapError> {
    Generator::new(config).run(output)
}
