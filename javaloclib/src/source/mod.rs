//! Source discovery: find files to count and read them.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Hierarchy scanning**: Build the directory → children map of a tree
//! - **File filtering**: Restrict to `.java` files, with glob include/exclude
//! - **Reading**: The `SourceReader` seam and its filesystem implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use javaloclib::source::{DirectoryHierarchy, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/generated/**")?;
//! let hierarchy = DirectoryHierarchy::scan("src", &filter)?;
//! ```

pub mod filter;
pub mod hierarchy;
pub mod reader;

pub use filter::{is_source_file, FilterConfig, SOURCE_EXTENSION};
pub use hierarchy::DirectoryHierarchy;
pub use reader::{FsReader, SourceReader};
