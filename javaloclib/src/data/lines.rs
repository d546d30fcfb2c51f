//! Counting of non-blank, non-comment lines.

use super::strip::{CommentStripper, UnterminatedComment};

/// Counts the lines that still carry code once comments are stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCounter {
    stripper: CommentStripper,
}

impl LineCounter {
    pub fn new(stripper: CommentStripper) -> Self {
        Self { stripper }
    }

    pub fn stripper(&self) -> &CommentStripper {
        &self.stripper
    }

    /// Count non-blank lines of `text` after removing comments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use javaloclib::LineCounter;
    ///
    /// let counter = LineCounter::default();
    /// let source = "// header\nclass A {\n\n    /* body */\n}\n";
    /// assert_eq!(counter.count(source), 2);
    /// ```
    pub fn count(&self, text: &str) -> u64 {
        count_non_blank(&self.stripper.strip(text))
    }

    /// Like [`LineCounter::count`], but rejects an unterminated block comment.
    pub fn try_count(&self, text: &str) -> Result<u64, UnterminatedComment> {
        self.stripper.try_strip(text).map(|s| count_non_blank(&s))
    }
}

/// Lines are split on `\n`, `\r\n` and lone `\r`; the empty piece between
/// `\r` and `\n` is blank and never counted.
fn count_non_blank(text: &str) -> u64 {
    text.split(|c| c == '\n' || c == '\r')
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str) -> u64 {
        LineCounter::default().count(text)
    }

    #[test]
    fn empty_input() {
        assert_eq!(count(""), 0);
        assert_eq!(count("\n\n   \n\t\n"), 0);
    }

    #[test]
    fn all_comments() {
        assert_eq!(count("// a\n/* b\n c */\n   // d\n"), 0);
    }

    #[test]
    fn interface_with_javadoc() {
        let source = "// This file contains 3 lines of code\n    public interface Dave {\n        /**\n         * count the number of lines in a file\n         */\n        int countLines(File inFile); // not the real signature!\n    }";
        assert_eq!(count(source), 3);
    }

    #[test]
    fn pathological_markers_and_string_literal() {
        let source = r#"/***/// leading junk after an empty block comment
/*
 * a block comment
 * spanning several lines
 */
public class Hello {
    public static void main(String[] args) { // entry point
        /* inline */ System.out.println("Hello/*");
    }
    // trailing comment
}
"#;
        assert_eq!(count(source), 5);
        assert!(LineCounter::default()
            .stripper()
            .strip(source)
            .contains("System.out.println(\"Hello/*\");"));
    }

    #[test]
    fn windows_line_breaks() {
        assert_eq!(count("a;\r\n\r\n// c\r\nb;\r\n"), 2);
    }

    #[test]
    fn lone_carriage_returns() {
        assert_eq!(count("a;\r\rb;\r"), 2);
    }

    #[test]
    fn count_matches_count_of_stripped_text() {
        let source = "x; /* a */\n// b\ny = \"//\";\n";
        let stripped = CommentStripper::default().strip(source);
        assert_eq!(count(source), count(&stripped));
        assert_eq!(count(source), 2);
    }

    #[test]
    fn binary_input_does_not_panic() {
        let bytes = [0u8, 159, 146, 150, b'\n', b'/', b'*', 0xff];
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(count(&text), 1);
    }

    #[test]
    fn try_count_line_with_old_mac_breaks() {
        let counter = LineCounter::default();
        assert_eq!(
            counter.try_count("a;\rb;\r/* open\r"),
            Err(UnterminatedComment { line: 3 })
        );
    }

    #[test]
    fn try_count_rejects_open_block() {
        let counter = LineCounter::default();
        assert_eq!(counter.try_count("a;\n/* b"), Err(UnterminatedComment { line: 2 }));
        assert_eq!(counter.try_count("a;\n/* b */"), Ok(1));
    }
}
