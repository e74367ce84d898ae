use crate::config::Config;
use crate::date::{local_now, Clock, DateResolver};
use crate::output::{GenerationSummary, OutputHandler};
use crate::sitemap::{paginate, SitemapIndex, UrlEntry};
use crate::walker::HtmlWalker;
use crate::{ConfigError, SitemapError};
use std::num::NonZeroUsize;

/// Entries gathered by the walk and date stages
#[derive(Debug, Clone, Default)]
pub struct CollectedEntries {
    pub entries: Vec<UrlEntry>,
    pub summary: GenerationSummary,
}

/// Sitemap generator for one configuration
pub struct Generator<'a> {
    config: &'a Config,
    resolver: DateResolver,
    clock: Clock,
}

impl<'a> Generator<'a> {
    /// Creates a generator reading the local wall clock
    pub fn new(config: &'a Config) -> Self {
        Self::with_clock(config, local_now)
    }

    /// Creates a generator whose index-page dates and index timestamp come
    /// from `clock`
    pub fn with_clock(config: &'a Config, clock: Clock) -> Self {
        Self {
            config,
            resolver: DateResolver::with_clock(clock),
            clock,
        }
    }

    /// Walks the scan root and resolves a date for every qualifying file
    pub fn collect_entries(&self) -> CollectedEntries {
        let site = &self.config.site;
        tracing::info!("Scanning {}", site.root.display());

        let exclude = self.config.sitemap.exclude_patterns();
        let mut walker = HtmlWalker::new(&site.root, &site.domain, &exclude);
        let mut collected = CollectedEntries::default();

        for file in walker.by_ref() {
            let resolved = self.resolver.resolve(&file.path);
            collected.summary.record_date(resolved.map(|r| r.source));
            collected.summary.files_scanned += 1;
            collected.entries.push(UrlEntry::new(
                file.location,
                resolved.map(|r| r.timestamp),
            ));
        }

        let stats = walker.stats();
        collected.summary.excluded = stats.excluded;
        collected.summary.skipped = stats.skipped;

        tracing::info!(
            "Found {} HTML files ({} excluded, {} unreadable entries skipped)",
            collected.summary.files_scanned,
            stats.excluded,
            stats.skipped
        );

        collected
    }

    /// Runs the whole pipeline, writing through `output`
    ///
    /// Any output failure aborts the run; documents already written stay
    /// where they are.
    pub fn run(&self, output: &dyn OutputHandler) -> Result<GenerationSummary, SitemapError> {
        let max_urls = NonZeroUsize::new(self.config.sitemap.max_urls).ok_or_else(|| {
            ConfigError::Validation("max_urls must be >= 1, got 0".to_string())
        })?;

        let CollectedEntries {
            entries,
            mut summary,
        } = self.collect_entries();
        summary.urls_emitted = entries.len() as u64;

        let files = paginate(entries, max_urls);
        tracing::info!(
            "Writing {} URLs across {} sitemap files",
            summary.urls_emitted,
            files.len()
        );

        for file in &files {
            let path = output.write_sitemap(file)?;
            summary.sitemap_files.push(path);
        }

        let index = SitemapIndex::new(
            &files,
            &self.config.site.domain,
            &self.config.sitemap.output_dir,
            (self.clock)(),
        );
        summary.index_path = output.write_index(&index)?;

        Ok(summary)
    }
}
