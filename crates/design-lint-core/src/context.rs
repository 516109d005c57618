//! Context handed to checks for a single file.

use std::path::Path;

/// Context provided to per-file checks.
///
/// Carries the raw content plus the same content pre-split into lines,
/// since most checks scan line by line (1-indexed for reporting) while
/// the markup attribute checks match against the joined content.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file being checked.
    pub path: &'a Path,
    /// Full file contents.
    pub content: &'a str,
    /// Contents split into lines, in order.
    pub lines: Vec<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            lines: content.lines().collect(),
        }
    }
}
