//! Last-modified date resolution
//!
//! Every sitemap entry gets its `lastmod` from the first strategy that
//! succeeds, tried in this order:
//!
//! 1. **Index name**: files whose name starts with `index` (any case) always
//!    get the current time; nothing else is consulted.
//! 2. **Content date**: the first `YYYY-MM-DD by` in the page text, at
//!    midnight.
//! 3. **Creation date**: the first `'creationDate' => 'YYYY-MM-DD HH:MM:SS'`
//!    in the page text.
//! 4. **File modified**: the filesystem modification time.
//!
//! All timestamps are local wall-clock time at second precision.

mod patterns;
mod resolver;

use chrono::NaiveDateTime;

pub use patterns::{decode_lossy, find_content_date, find_creation_date};
pub use resolver::{local_now, Clock, DateResolver, DateSource, ResolvedDate};

/// Layout of every timestamp written to a sitemap
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a timestamp as ISO-8601 without fraction or offset
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use static_sitemap::date::format_timestamp;
///
/// let ts = NaiveDate::from_ymd_opt(2017, 6, 12).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format_timestamp(&ts), "2017-06-12T00:00:00");
/// ```
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
