//! Static-Sitemap main entry point
//!
//! This is the command-line interface for generating sitemaps of an
//! offline HTML site.

use anyhow::Context;
use clap::Parser;
use static_sitemap::config::{load_sitemap_config, Config, SitemapConfig};
use static_sitemap::generate;
use static_sitemap::output::{print_summary, DryRunOutput, FileOutput, OutputHandler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Static-Sitemap: sitemaps for offline HTML sites
///
/// Scans a directory of HTML files and writes sitemap files plus a sitemap
/// index, dating each page from index naming, embedded dates, or the
/// file's modification time.
#[derive(Parser, Debug)]
#[command(name = "static-sitemap")]
#[command(version)]
#[command(about = "Generate sitemaps and a sitemap index for an offline HTML site", long_about = None)]
struct Cli {
    /// Root directory to scan for HTML files
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Root domain URL (e.g., https://example.com)
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Maximum number of URLs per sitemap file [default: 1000]
    #[arg(long = "max-url", value_name = "N")]
    max_url: Option<usize>,

    /// Output directory for sitemap files [default: sitemaps]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// TOML file with a [sitemap] table (max-urls, output-dir, exclude)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Scan and render everything but write no files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            return Err(e);
        }
    };

    let output: Box<dyn OutputHandler> = if cli.dry_run {
        tracing::info!("Dry run: no files will be written");
        Box::new(DryRunOutput::new(&config.sitemap.output_dir))
    } else {
        Box::new(FileOutput::new(&config.sitemap.output_dir)?)
    };

    match generate(&config, output.as_ref()) {
        Ok(summary) => {
            if !cli.quiet {
                print_summary(&summary);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Sitemap generation failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("static_sitemap=info,warn"),
            1 => EnvFilter::new("static_sitemap=debug,info"),
            2 => EnvFilter::new("static_sitemap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Combines defaults, the optional config file, and command-line flags
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let sitemap = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_sitemap_config(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => SitemapConfig::default(),
    };

    let sitemap = sitemap.with_overrides(cli.max_url, cli.output.clone());
    Ok(Config::new(&cli.directory, &cli.domain, sitemap)?)
}
