//! Output formatting: present a report as text.
//!
//! The report writer prints one line per entry, indented by depth and
//! labelled with the entry's final path segment. Structured (JSON) output
//! is produced by serializing [`crate::Report`] directly.

pub mod report;

pub use report::{format_entry, render_text};
