//! Plain-text rendering of a report.
//!
//! One line per entry, root first: two spaces of indentation per depth
//! level, the entry's final path segment, `": "`, and the line count.
//!
//! ```text
//! project: 7
//!   B.java: 2
//!   a: 5
//!     Y.java: 2
//!     X.java: 3
//! ```

use crate::data::report::ReportEntry;

/// Indentation added per depth level.
pub const INDENT: &str = "  ";

/// Between the entry name and its count.
pub const SEPARATOR: &str = ": ";

/// Format a single entry without a trailing newline.
pub fn format_entry(entry: &ReportEntry) -> String {
    format!(
        "{}{}{}{}",
        INDENT.repeat(entry.depth),
        entry.name,
        SEPARATOR,
        entry.lines
    )
}

/// Render every entry, one per line.
pub fn render_text(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_indented_names() {
        let entries = vec![
            ReportEntry::directory("/work/project", 0, 7),
            ReportEntry::file("/work/project/B.java", 1, 2),
            ReportEntry::directory("/work/project/a", 1, 5),
            ReportEntry::file("/work/project/a/Y.java", 2, 2),
            ReportEntry::file("/work/project/a/X.java", 2, 3),
        ];

        assert_eq!(
            render_text(&entries),
            "project: 7\n  B.java: 2\n  a: 5\n    Y.java: 2\n    X.java: 3\n"
        );
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(render_text(&[]), "");
    }
}
