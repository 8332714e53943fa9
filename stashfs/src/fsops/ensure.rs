//! Existence-ensuring creation.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `path` and all missing intermediate directories.
///
/// Succeeds if the directory already exists; it fails only when creation is
/// attempted and does not succeed, which callers treat as an unrecoverable
/// storage failure.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if a non-directory occupies `path`, or
/// the underlying error if creation fails (for example, permission denied).
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        if path.exists() && !path.is_dir() {
            Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "exists and is not a directory".to_string(),
            }
        } else {
            Error::from_io(e, path)
        }
    })
}

/// Create an empty file at `path` if absent.
///
/// Succeeds without touching content if the file already exists.
///
/// # Errors
///
/// Returns an error if the file is absent and cannot be created (missing
/// parent directory, permission denied, or a directory occupying the path).
pub fn ensure_file_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    if path.is_dir() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "exists and is a directory".to_string(),
        });
    }
    // append + create leaves existing content untouched if another process
    // creates the file between the check and the open.
    fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::from_io(e, path))?;
    Ok(())
}
