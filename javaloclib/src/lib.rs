//! # javaloclib
//!
//! A lines of code counter library for Java sources that reports per-file
//! counts and per-directory totals.
//!
//! ## Overview
//!
//! A line counts when it still holds something other than whitespace after
//! comments are removed. Comment removal understands string literals, so
//! `"http://example.com"` or `"Hello/*"` never start a comment.
//!
//! The pipeline has three stages:
//!
//! - **Source**: scan a directory into a parent → children hierarchy
//!   (`.java` files only, optional glob filters)
//! - **Data**: strip comments, count lines, and sum counts bottom-up
//! - **Output**: render the report as indented text (or serialize it)
//!
//! ## Report order
//!
//! The root comes first. The remaining entries follow in reverse discovery
//! order, which places every directory before its own contents.
//!
//! ## Example
//!
//! ```rust
//! use javaloclib::{count_path, render_text, CountOptions, FilterConfig, LineCounter};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Count a snippet of source text
//! let counter = LineCounter::default();
//! assert_eq!(counter.count("int a; // one\n/* two */\nint b;\n"), 2);
//!
//! // Count a directory tree
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("Hello.java"), "class Hello {\n}\n").unwrap();
//! let report = count_path(dir.path(), CountOptions::new()).unwrap();
//! assert_eq!(report.total, 2);
//! assert!(render_text(&report.entries).ends_with("  Hello.java: 2\n"));
//!
//! // Count with filtering
//! let filter = FilterConfig::new().exclude("**/generated/**").unwrap();
//! let report = count_path(dir.path(), CountOptions::new().filter(filter)).unwrap();
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    count_file, count_path, validate_path, CommentStripper, CommentSyntax, CountOptions,
    HierarchyAggregator, LineCounter, Report, ReportEntry, UnterminatedComment,
};
pub use error::JavalocError;
pub use output::{format_entry, render_text};
pub use source::{
    is_source_file, DirectoryHierarchy, FilterConfig, FsReader, SourceReader, SOURCE_EXTENSION,
};

/// Result type for javaloclib operations
pub type Result<T> = std::result::Result<T, JavalocError>;
