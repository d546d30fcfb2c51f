//! Data collection: strip comments, count lines, and aggregate totals.
//!
//! This module handles the counting stage of the pipeline. It provides:
//!
//! - **Stripping**: `CommentStripper` removes comments but keeps string literals
//! - **Counting**: `LineCounter` counts non-blank lines of stripped text
//! - **Aggregation**: `HierarchyAggregator` sums counts bottom-up over a tree
//! - **Entry points**: `count_path` and `count_file`
//!
//! ## Example
//!
//! ```rust,ignore
//! use javaloclib::data::{count_path, CountOptions};
//!
//! let report = count_path("src", CountOptions::new())?;
//! println!("Total code lines: {}", report.total);
//! ```

pub mod aggregate;
pub mod counter;
pub mod lines;
pub mod report;
pub mod strip;

pub use aggregate::HierarchyAggregator;
pub use counter::{count_file, count_path, validate_path, CountOptions};
pub use lines::LineCounter;
pub use report::{Report, ReportEntry};
pub use strip::{CommentStripper, CommentSyntax, UnterminatedComment};
