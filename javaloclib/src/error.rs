//! Error types for javaloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
#[derive(Error, Debug)]
pub enum JavalocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to list a directory while building the hierarchy
    #[error("failed to scan '{path}': {message}")]
    Scan { path: PathBuf, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A file was given that does not carry the source extension
    #[error("not a .{extension} file: {path}")]
    NotSourceFile { path: PathBuf, extension: String },

    /// Block comment opened but never closed (strict mode only)
    #[error("unterminated block comment in '{path}' starting at line {line}")]
    UnterminatedComment { path: PathBuf, line: usize },
}
