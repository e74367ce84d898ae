use crate::date::patterns::{decode_lossy, find_content_date, find_creation_date};
use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};
use std::cell::OnceCell;
use std::fmt;
use std::path::Path;

/// Source of the current wall-clock time
pub type Clock = fn() -> NaiveDateTime;

/// Current local time truncated to whole seconds
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Strategy that produced a resolved date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateSource {
    /// File name starts with `index`; current time used
    IndexName,

    /// `YYYY-MM-DD by` marker in the page text
    ContentDate,

    /// `'creationDate' => '...'` marker in the page text
    CreationDate,

    /// Filesystem modification time
    FileModified,
}

impl DateSource {
    /// All sources, in the order they are tried
    pub const ALL: [DateSource; 4] = [
        DateSource::IndexName,
        DateSource::ContentDate,
        DateSource::CreationDate,
        DateSource::FileModified,
    ];

    /// Human-readable label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::IndexName => "index page (current time)",
            Self::ContentDate => "content date",
            Self::CreationDate => "creation date comment",
            Self::FileModified => "file modification time",
        }
    }
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A last-modified timestamp and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub timestamp: NaiveDateTime,
    pub source: DateSource,
}

type Strategy = fn(&FileContext<'_>) -> Option<NaiveDateTime>;

/// Strategies in priority order; the first to return a date wins
const STRATEGIES: [(DateSource, Strategy); 4] = [
    (DateSource::IndexName, index_name),
    (DateSource::ContentDate, content_date),
    (DateSource::CreationDate, creation_date),
    (DateSource::FileModified, file_modified),
];

/// Per-file state shared by the strategies
///
/// The file content is read at most once, and only if a content strategy
/// is actually reached.
struct FileContext<'a> {
    path: &'a Path,
    clock: Clock,
    content: OnceCell<Option<String>>,
}

impl<'a> FileContext<'a> {
    fn new(path: &'a Path, clock: Clock) -> Self {
        Self {
            path,
            clock,
            content: OnceCell::new(),
        }
    }

    fn content(&self) -> Option<&str> {
        self.content
            .get_or_init(|| read_content(self.path))
            .as_deref()
    }
}

/// Resolves the last-modified date of scanned files
#[derive(Debug, Clone, Copy)]
pub struct DateResolver {
    clock: Clock,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DateResolver {
    /// Creates a resolver reading the local wall clock
    pub fn new() -> Self {
        Self { clock: local_now }
    }

    /// Creates a resolver with a custom clock
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Resolves the last-modified date of the file at `path`
    ///
    /// Returns `None` only when every strategy fails, which requires the
    /// file's metadata to be unreadable.
    pub fn resolve(&self, path: &Path) -> Option<ResolvedDate> {
        let context = FileContext::new(path, self.clock);

        let resolved = STRATEGIES.iter().find_map(|(source, strategy)| {
            strategy(&context).map(|timestamp| ResolvedDate {
                timestamp,
                source: *source,
            })
        });

        match &resolved {
            Some(date) => tracing::trace!(
                "{}: {} from {}",
                path.display(),
                date.timestamp,
                date.source
            ),
            None => tracing::warn!("No last-modified date for {}", path.display()),
        }

        resolved
    }
}

fn index_name(context: &FileContext<'_>) -> Option<NaiveDateTime> {
    let name = context.path.file_name()?.to_string_lossy().to_lowercase();
    name.starts_with("index").then(|| (context.clock)())
}

fn content_date(context: &FileContext<'_>) -> Option<NaiveDateTime> {
    find_content_date(context.content()?)
}

fn creation_date(context: &FileContext<'_>) -> Option<NaiveDateTime> {
    find_creation_date(context.content()?)
}

fn file_modified(context: &FileContext<'_>) -> Option<NaiveDateTime> {
    match std::fs::metadata(context.path).and_then(|m| m.modified()) {
        Ok(modified) => Some(
            DateTime::<Local>::from(modified)
                .naive_local()
                .trunc_subsecs(0),
        ),
        Err(e) => {
            tracing::warn!(
                "Cannot read modification time of {}: {}",
                context.path.display(),
                e
            );
            None
        }
    }
}

fn read_content(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(decode_lossy(&bytes)),
        Err(e) => {
            tracing::warn!("Error reading file {}: {}", path.display(), e);
            None
        }
    }
}
