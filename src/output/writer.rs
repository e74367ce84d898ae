//! Output handlers writing to disk or only reporting

use crate::output::traits::OutputHandler;
use crate::output::xml::{render_index, render_sitemap};
use crate::sitemap::{SitemapFile, SitemapIndex, INDEX_FILE_NAME};
use crate::{OutputError, OutputResult};
use std::path::{Path, PathBuf};

/// Writes sitemap documents into an output directory
#[derive(Debug, Clone)]
pub struct FileOutput {
    output_dir: PathBuf,
}

impl FileOutput {
    /// Creates the handler, creating `output_dir` and its parents if needed
    pub fn new(output_dir: impl Into<PathBuf>) -> OutputResult<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|source| OutputError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// Directory documents are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_document(&self, file_name: &str, document: &str) -> OutputResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        std::fs::write(&path, document.as_bytes()).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), document.len());
        Ok(path)
    }
}

impl OutputHandler for FileOutput {
    fn write_sitemap(&self, file: &SitemapFile) -> OutputResult<PathBuf> {
        let document = render_sitemap(file)?;
        self.write_document(&file.file_name, &document)
    }

    fn write_index(&self, index: &SitemapIndex) -> OutputResult<PathBuf> {
        let document = render_index(index)?;
        self.write_document(INDEX_FILE_NAME, &document)
    }
}

/// Renders documents and reports them without touching the filesystem
#[derive(Debug, Clone)]
pub struct DryRunOutput {
    output_dir: PathBuf,
}

impl DryRunOutput {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl OutputHandler for DryRunOutput {
    fn write_sitemap(&self, file: &SitemapFile) -> OutputResult<PathBuf> {
        let document = render_sitemap(file)?;
        let path = self.output_dir.join(&file.file_name);
        tracing::info!(
            "Would write {} ({} URLs, {} bytes)",
            path.display(),
            file.entries.len(),
            document.len()
        );
        Ok(path)
    }

    fn write_index(&self, index: &SitemapIndex) -> OutputResult<PathBuf> {
        let document = render_index(index)?;
        let path = self.output_dir.join(INDEX_FILE_NAME);
        tracing::info!(
            "Would write {} ({} sitemaps, {} bytes)",
            path.display(),
            index.entries.len(),
            document.len()
        );
        Ok(path)
    }
}
