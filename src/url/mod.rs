//! URL handling module for Static-Sitemap
//!
//! This module turns scanned file paths into public URLs, applies the
//! exclusion filter, and builds the locations listed in the sitemap index.

mod domain;
mod location;
mod matcher;

// Re-export main functions
pub use domain::normalize_domain;
pub use location::{build_location, index_location, relative_url_path};
pub use matcher::is_excluded;
