//! Bottom-up line totals over a directory hierarchy.
//!
//! The walk is depth-first. Every directory's count is the sum of its
//! children, so a directory entry can only be produced after everything
//! beneath it. Entries are therefore collected in post-order (children
//! first, directory last), the root is appended, and the whole list is
//! reversed. The result starts with the root, and every directory comes
//! before its own contents; siblings appear in reverse discovery order.
//!
//! ```text
//! hierarchy            collected (post-order)    reported
//! root/                a/X.java                  root      7
//!   a/                 a/Y.java                  B.java    2
//!     X.java (3)       a                         a         5
//!     Y.java (2)       B.java                    Y.java    2
//!   B.java (2)         root                      X.java    3
//! ```

use std::path::Path;

use tracing::{debug, trace};

use super::lines::LineCounter;
use super::report::ReportEntry;
use crate::error::JavalocError;
use crate::source::hierarchy::DirectoryHierarchy;
use crate::source::reader::SourceReader;
use crate::Result;

/// Walks a [`DirectoryHierarchy`] and produces the ordered report entries.
///
/// The aggregator borrows its collaborators and keeps no state between
/// calls, so one instance can be reused for any number of roots.
pub struct HierarchyAggregator<'a, R: SourceReader> {
    counter: &'a LineCounter,
    reader: &'a R,
    strict: bool,
}

impl<'a, R: SourceReader> HierarchyAggregator<'a, R> {
    pub fn new(counter: &'a LineCounter, reader: &'a R) -> Self {
        Self {
            counter,
            reader,
            strict: false,
        }
    }

    /// Fail on unterminated block comments instead of dropping the rest of the file.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Count every file under `root` and return the report entries, root first.
    ///
    /// A `root` that is not a directory in `hierarchy` yields a single file
    /// entry at depth 0. The first read or strict-mode failure aborts the
    /// whole walk; no partial list is returned.
    pub fn aggregate(
        &self,
        root: &Path,
        hierarchy: &DirectoryHierarchy,
    ) -> Result<Vec<ReportEntry>> {
        if !hierarchy.is_dir(root) {
            let lines = self.count_file(root)?;
            return Ok(vec![ReportEntry::file(root, 0, lines)]);
        }

        let mut entries = Vec::new();
        let total = self.visit_children(root, hierarchy, 1, &mut entries)?;
        entries.push(ReportEntry::directory(root, 0, total));
        entries.reverse();

        debug!(root = %root.display(), total, entries = entries.len(), "aggregated");
        Ok(entries)
    }

    /// Append the post-order entries of everything below `dir`; return their total.
    fn visit_children(
        &self,
        dir: &Path,
        hierarchy: &DirectoryHierarchy,
        depth: usize,
        entries: &mut Vec<ReportEntry>,
    ) -> Result<u64> {
        let mut total = 0;

        for child in hierarchy.children(dir) {
            let entry = if hierarchy.is_dir(child) {
                let subtotal = self.visit_children(child, hierarchy, depth + 1, entries)?;
                ReportEntry::directory(child, depth, subtotal)
            } else {
                ReportEntry::file(child, depth, self.count_file(child)?)
            };

            trace!(path = %entry.path.display(), lines = entry.lines, depth, "entry");
            total += entry.lines;
            entries.push(entry);
        }

        Ok(total)
    }

    fn count_file(&self, path: &Path) -> Result<u64> {
        let text = self.reader.read_source(path)?;

        let lines = if self.strict {
            self.counter
                .try_count(&text)
                .map_err(|e| JavalocError::UnterminatedComment {
                    path: path.to_path_buf(),
                    line: e.line,
                })?
        } else {
            self.counter.count(&text)
        };

        debug!(path = %path.display(), lines, "counted file");
        Ok(lines)
    }
}
