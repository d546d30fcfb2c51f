//! Report data: one entry per counted file or directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of the report.
///
/// For a file, `lines` is its count of non-blank, non-comment lines.
/// For a directory, `lines` is the sum over every file beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Full path of the file or directory.
    pub path: PathBuf,
    /// Final path segment, used when printing.
    pub name: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Directory levels below the scan root (root = 0).
    pub depth: usize,
    /// Resolved line count.
    pub lines: u64,
}

impl ReportEntry {
    pub fn file(path: impl Into<PathBuf>, depth: usize, lines: u64) -> Self {
        Self::new(path.into(), false, depth, lines)
    }

    pub fn directory(path: impl Into<PathBuf>, depth: usize, lines: u64) -> Self {
        Self::new(path.into(), true, depth, lines)
    }

    fn new(path: PathBuf, is_dir: bool, depth: usize, lines: u64) -> Self {
        let name = display_name(&path);
        Self {
            path,
            name,
            is_dir,
            depth,
            lines,
        }
    }
}

/// Final segment of `path`, falling back to the whole path for `.`, `/` and the like.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// The full result of counting one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The path that was counted
    pub root: PathBuf,
    /// Line count of the root entry
    pub total: u64,
    /// Entries, root first
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>, entries: Vec<ReportEntry>) -> Self {
        let total = entries.first().map(|e| e.lines).unwrap_or(0);
        Self {
            root: root.into(),
            total,
            entries,
        }
    }

    /// Number of file entries in the report.
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_final_segment() {
        let entry = ReportEntry::file("src/main/java/App.java", 3, 10);
        assert_eq!(entry.name, "App.java");
        assert!(!entry.is_dir);

        let dir = ReportEntry::directory("src/main", 1, 10);
        assert_eq!(dir.name, "main");
        assert!(dir.is_dir);
    }

    #[test]
    fn name_of_bare_root() {
        assert_eq!(ReportEntry::directory(".", 0, 0).name, ".");
        assert_eq!(ReportEntry::directory("/", 0, 0).name, "/");
    }

    #[test]
    fn report_total_comes_from_root() {
        let report = Report::new(
            "proj",
            vec![
                ReportEntry::directory("proj", 0, 7),
                ReportEntry::file("proj/B.java", 1, 4),
                ReportEntry::file("proj/A.java", 1, 3),
            ],
        );
        assert_eq!(report.total, 7);
        assert_eq!(report.file_count(), 2);
        assert_eq!(Report::new("empty", Vec::new()).total, 0);
    }
}
