//! Sitemap data model and pagination
//!
//! - `UrlEntry`: one page URL with its optional last-modified time
//! - `SitemapFile`: a numbered, size-bounded slice of entries
//! - `SitemapIndex`: the document pointing at every sitemap file

mod model;
mod paginate;

pub use model::{IndexEntry, SitemapFile, SitemapIndex, UrlEntry, INDEX_FILE_NAME};
pub use paginate::{paginate, sitemap_file_name};
