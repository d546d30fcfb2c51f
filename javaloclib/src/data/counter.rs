//! High-level LOC counting API.
//!
//! This module wires the pieces together: validate the path, scan the
//! directory hierarchy, and aggregate line counts with a filesystem reader.

use std::path::Path;

use tracing::info;

use crate::error::JavalocError;
use crate::source::filter::{is_source_file, FilterConfig, SOURCE_EXTENSION};
use crate::source::hierarchy::DirectoryHierarchy;
use crate::source::reader::{FsReader, SourceReader};
use crate::Result;

use super::aggregate::HierarchyAggregator;
use super::lines::LineCounter;
use super::report::Report;

/// Options for counting LOC.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File filter applied while scanning directories
    pub file_filter: FilterConfig,
    /// Reject unterminated block comments instead of dropping the remainder
    pub strict: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Enable or disable strict comment checking.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Check that `path` exists and is either a directory or a `.java` file.
///
/// Anything that is not a directory (regular files, device nodes, pipes)
/// must carry the source extension.
pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(JavalocError::PathNotFound(path.to_path_buf()));
    }

    if !path.is_dir() && !is_source_file(path) {
        return Err(JavalocError::NotSourceFile {
            path: path.to_path_buf(),
            extension: SOURCE_EXTENSION.to_string(),
        });
    }

    Ok(())
}

/// Count a `.java` file or every `.java` file under a directory.
///
/// The returned report lists the root first, followed by the rest of the
/// tree in reverse discovery order. Each directory's count is the sum of
/// all files beneath it.
///
/// # Example
///
/// ```rust
/// use javaloclib::{count_path, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("util")).unwrap();
/// fs::write(dir.path().join("App.java"), "class App {\n  // todo\n}\n").unwrap();
/// fs::write(dir.path().join("util/Str.java"), "class Str {}\n").unwrap();
///
/// let report = count_path(dir.path(), CountOptions::new()).unwrap();
/// assert_eq!(report.total, 3);
/// assert_eq!(report.entries.len(), 4);
/// assert!(report.entries[0].is_dir);
/// ```
pub fn count_path(path: impl AsRef<Path>, options: CountOptions) -> Result<Report> {
    let path = path.as_ref();
    validate_path(path)?;

    let hierarchy = DirectoryHierarchy::scan(path, &options.file_filter)?;
    let counter = LineCounter::default();
    let entries = HierarchyAggregator::new(&counter, &FsReader)
        .strict(options.strict)
        .aggregate(hierarchy.root(), &hierarchy)?;

    let report = Report::new(path, entries);
    info!(
        path = %path.display(),
        total = report.total,
        files = report.file_count(),
        "counted"
    );
    Ok(report)
}

/// Count a single `.java` file.
///
/// # Example
///
/// ```rust
/// use javaloclib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("Main.java");
/// fs::write(&file_path, "class Main {\n    /* nothing */\n}\n").unwrap();
///
/// assert_eq!(count_file(&file_path).unwrap(), 2);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    validate_path(path)?;
    let text = FsReader.read_source(path)?;
    Ok(LineCounter::default().count(&text))
}
