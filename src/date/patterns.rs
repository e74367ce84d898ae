use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// `YYYY-MM-DD` followed by whitespace and the word `by`
fn content_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d{4}-\d{2}-\d{2})\s+by").expect("content date regex is valid")
    })
}

/// `'creationDate' => '<value>'`
fn creation_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)'creationDate'\s*=>\s*'([^']+)'").expect("creation date regex is valid")
    })
}

/// Finds the first `YYYY-MM-DD by` marker and returns that day at midnight
///
/// Only the first marker is considered. If its digits are not a real
/// calendar date the result is `None`.
///
/// # Examples
///
/// ```
/// use static_sitemap::date::find_content_date;
///
/// let ts = find_content_date("1061 2017-06-12 by someone").unwrap();
/// assert_eq!(ts.to_string(), "2017-06-12 00:00:00");
/// ```
pub fn find_content_date(content: &str) -> Option<NaiveDateTime> {
    let captures = content_date_regex().captures(content)?;
    let date = NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
}

/// Finds the first `'creationDate' => '...'` marker and parses its value
///
/// The value must read `YYYY-MM-DD HH:MM:SS`; anything else yields `None`.
pub fn find_creation_date(content: &str) -> Option<NaiveDateTime> {
    let captures = creation_date_regex().captures(content)?;
    NaiveDateTime::parse_from_str(&captures[1], "%Y-%m-%d %H:%M:%S").ok()
}

/// Decodes bytes as UTF-8, dropping every invalid sequence
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
