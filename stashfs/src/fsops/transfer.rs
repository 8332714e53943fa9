//! Moves and randomized renames.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Error, Result};

/// Maximum random-suffix generation attempts before
/// [`Error::RenameExhausted`].
pub const MAX_RENAME_ATTEMPTS: usize = 10;

/// Length of the random suffix appended by
/// [`rename_with_random_extension`].
const SUFFIX_LEN: usize = 16;

/// Move `from` to `to`.
///
/// On the same volume this is a single atomic rename. Across volumes it
/// falls back to copy-then-delete-source; if the copy succeeds but the
/// source cannot be deleted, [`Error::CrossVolumeMoveFailed`] reports the
/// surviving duplicate rather than swallowing it.
///
/// # Errors
///
/// - [`Error::PathNotFound`] if `from` is absent (checked before any
///   mutation; `to` is untouched).
/// - [`Error::DestinationExists`] if `to` is already occupied.
/// - [`Error::CrossVolumeMoveFailed`] for the partial cross-volume case.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::symlink_metadata(from).map_err(|e| Error::from_io(e, from))?;
    if fs::symlink_metadata(to).is_ok() {
        return Err(Error::DestinationExists {
            path: to.to_path_buf(),
        });
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_then_delete(from, to),
        Err(e) => Err(Error::from_io(e, from)),
    }
}

fn copy_then_delete(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| Error::from_io(e, from))?;
    if let Err(e) = fs::remove_file(from) {
        return Err(Error::CrossVolumeMoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}

/// Rename `path` in place by appending a randomized suffix.
///
/// Used to retire a corrupt file out of the way before recreating a fresh
/// one at the original path. The suffix is regenerated on collision (the
/// probability is minuscule but handled, not assumed impossible) up to
/// [`MAX_RENAME_ATTEMPTS`] times. Returns the new path.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if `path` is absent, or
/// [`Error::RenameExhausted`] if every generated suffix collided.
pub fn rename_with_random_extension(path: &Path) -> Result<PathBuf> {
    fs::symlink_metadata(path).map_err(|e| Error::from_io(e, path))?;

    for _ in 0..MAX_RENAME_ATTEMPTS {
        let candidate = with_suffix(path, &random_suffix());
        if fs::symlink_metadata(&candidate).is_ok() {
            continue;
        }
        fs::rename(path, &candidate).map_err(|e| Error::from_io(e, path))?;
        return Ok(candidate);
    }

    Err(Error::RenameExhausted {
        path: path.to_path_buf(),
        attempts: MAX_RENAME_ATTEMPTS,
    })
}

fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(SUFFIX_LEN);
    suffix
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
