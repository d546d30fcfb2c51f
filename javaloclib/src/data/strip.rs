//! Comment stripping for Java-style source text.
//!
//! The stripper walks the text once with single-character lookahead and
//! removes line comments (`// ...`) and block comments (`/* ... */`) while
//! copying string literals through verbatim, so that comment markers inside
//! a literal such as `"Hello/*"` stay inert.
//!
//! Removed spans are replaced with nothing. Line breaks are never removed:
//! a line comment keeps its terminating newline and a block comment keeps
//! every newline it spanned, so the stripped text has as many physical
//! lines as the input.

use std::iter::Peekable;
use std::str::Chars;

/// The designated markers recognised by [`CommentStripper`].
///
/// Every marker is two characters. The defaults are the Java markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Starts a comment that runs to the end of the physical line
    pub line_comment: [char; 2],
    /// Opens a block comment
    pub block_open: [char; 2],
    /// Closes a block comment (the first one found wins, no nesting)
    pub block_close: [char; 2],
    /// Delimits string literals
    pub quote: char,
    /// Lets a quote or another escape appear inside a literal
    pub escape: char,
}

impl CommentSyntax {
    /// Java comment and string syntax.
    pub const fn java() -> Self {
        Self {
            line_comment: ['/', '/'],
            block_open: ['/', '*'],
            block_close: ['*', '/'],
            quote: '"',
            escape: '\\',
        }
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::java()
    }
}

/// A block comment that was still open when the text ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnterminatedComment {
    /// 1-based line of the opening marker
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InString,
    InLineComment,
    InBlockComment { opened_at: usize },
}

/// Removes comments from source text, leaving string literals untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentStripper {
    syntax: CommentSyntax,
}

impl CommentStripper {
    pub fn new(syntax: CommentSyntax) -> Self {
        Self { syntax }
    }

    /// Strip every comment from `text`.
    ///
    /// A block comment with no closing marker swallows the remainder of the
    /// text (its newlines are still kept). Use [`CommentStripper::try_strip`]
    /// to reject such input instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use javaloclib::CommentStripper;
    ///
    /// let stripper = CommentStripper::default();
    /// let text = "int x = 1; // one\nString s = \"// kept\";\n";
    /// assert_eq!(stripper.strip(text), "int x = 1; \nString s = \"// kept\";\n");
    /// ```
    pub fn strip(&self, text: &str) -> String {
        self.scan(text).0
    }

    /// Strip every comment from `text`, failing on an unterminated block comment.
    pub fn try_strip(&self, text: &str) -> Result<String, UnterminatedComment> {
        match self.scan(text) {
            (stripped, None) => Ok(stripped),
            (_, Some(line)) => Err(UnterminatedComment { line }),
        }
    }

    fn scan(&self, text: &str) -> (String, Option<usize>) {
        let syntax = &self.syntax;
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        let mut state = State::Normal;
        let mut line = 1;

        while let Some(c) = chars.next() {
            if c == '\n' || (c == '\r' && chars.peek() != Some(&'\n')) {
                line += 1;
            }

            state = match state {
                State::Normal => {
                    if c == syntax.quote {
                        out.push(c);
                        State::InString
                    } else if starts_marker(c, &mut chars, syntax.line_comment) {
                        State::InLineComment
                    } else if starts_marker(c, &mut chars, syntax.block_open) {
                        State::InBlockComment { opened_at: line }
                    } else {
                        out.push(c);
                        State::Normal
                    }
                }
                State::InString => {
                    out.push(c);
                    if c == syntax.escape {
                        if let Some(&next) = chars.peek() {
                            if next == syntax.quote || next == syntax.escape {
                                out.push(next);
                                chars.next();
                            }
                        }
                        State::InString
                    } else if c == syntax.quote {
                        State::Normal
                    } else {
                        State::InString
                    }
                }
                State::InLineComment => {
                    if is_line_break(c) {
                        out.push(c);
                        State::Normal
                    } else {
                        State::InLineComment
                    }
                }
                State::InBlockComment { opened_at } => {
                    if is_line_break(c) {
                        out.push(c);
                        state
                    } else if starts_marker(c, &mut chars, syntax.block_close) {
                        State::Normal
                    } else {
                        State::InBlockComment { opened_at }
                    }
                }
            };
        }

        let unterminated = match state {
            State::InBlockComment { opened_at } => Some(opened_at),
            _ => None,
        };
        (out, unterminated)
    }
}

/// Consume the second marker character if `c` plus the lookahead form `marker`.
fn starts_marker(c: char, chars: &mut Peekable<Chars<'_>>, marker: [char; 2]) -> bool {
    if c == marker[0] && chars.peek() == Some(&marker[1]) {
        chars.next();
        true
    } else {
        false
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}
