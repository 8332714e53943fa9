//! File size queries.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Byte size of the file at `path`.
///
/// Returns `Ok(None)` when the path does not exist: a sentinel, not an
/// error, so callers can distinguish "no file" from "empty file"
/// (`Ok(Some(0))`).
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path exists but is not a regular
/// file, or the underlying error for other I/O failures.
pub fn file_size(path: &Path) -> Result<Option<u64>> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(Some(metadata.len())),
        Ok(_) => Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::from_io(e, path)),
    }
}
