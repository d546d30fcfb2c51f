//! Reading source text from storage.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::JavalocError;
use crate::Result;

/// Supplies the full text of a source file.
pub trait SourceReader {
    fn read_source(&self, path: &Path) -> Result<String>;
}

/// Reads files from the local filesystem.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray binary file yields some count instead of an error. The file handle
/// is closed before `read_source` returns, on success and failure alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_source(&self, path: &Path) -> Result<String> {
        let file_read = |source| JavalocError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = BufReader::new(File::open(path).map_err(file_read)?);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(file_read)?;

        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
