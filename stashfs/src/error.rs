//! Error types for the stashfs library.
//!
//! This module provides the error hierarchy for all operations in the
//! stashfs library, using `thiserror` for ergonomic error handling.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a stashfs error.
///
/// # Examples
///
/// ```
/// use stashfs::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(1024)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the stashfs library.
///
/// Single-entity operations surface the first error immediately; bulk
/// operations (recursive protection, directory sweeps) collect per-item
/// failures into aggregate outcomes instead and reserve this type for
/// failures that prevent the operation from starting at all.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS cannot supply a base directory for a storage root.
    ///
    /// This is fatal for the affected storage class; callers should treat it
    /// as unrecoverable (typically an application startup failure).
    #[error("storage root '{root}' unavailable: {reason}")]
    DirectoryUnavailable {
        /// The storage root that could not be resolved.
        root: crate::path::StorageRoot,
        /// Why no base directory could be provided.
        reason: String,
    },

    /// An operation target was absent when existence was required.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A move destination already exists.
    #[error("destination already exists: {}", path.display())]
    DestinationExists {
        /// The occupied destination path.
        path: PathBuf,
    },

    /// A cross-volume move copied the file but failed to delete the source.
    ///
    /// Duplicate data remains at the source path. This is reported, never
    /// silently swallowed, so callers can decide whether to retry the delete.
    #[error("cross-volume move left a copy behind at {}: {source}", from.display())]
    CrossVolumeMoveFailed {
        /// The source path that could not be deleted.
        from: PathBuf,
        /// The destination path holding the successful copy.
        to: PathBuf,
        /// The underlying delete error.
        #[source]
        source: io::Error,
    },

    /// Randomized-suffix rename ran out of collision retries.
    #[error("rename of {} exhausted {attempts} random-suffix attempts", path.display())]
    RenameExhausted {
        /// The path that could not be renamed.
        path: PathBuf,
        /// How many suffixes were tried.
        attempts: usize,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an I/O error to a structured stashfs error for `path`.
    ///
    /// `NotFound` and `PermissionDenied` kinds become their dedicated
    /// variants so callers can match on them; everything else stays a
    /// wrapped I/O error.
    #[must_use]
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use stashfs::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use stashfs::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error indicates an unrecoverable storage-root failure.
    #[must_use]
    pub fn is_directory_unavailable(&self) -> bool {
        matches!(self, Self::DirectoryUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::StorageRoot;

    #[test]
    fn test_directory_unavailable_display() {
        let err = Error::DirectoryUnavailable {
            root: StorageRoot::SharedData,
            reason: "no group identifier configured".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("shared-data"));
        assert!(display.contains("no group identifier configured"));
        assert!(err.is_directory_unavailable());
    }

    #[test]
    fn test_path_not_found_display() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/missing/file"),
        };
        let display = format!("{err}");
        assert!(display.contains("path not found"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/file"));
    }

    #[test]
    fn test_cross_volume_move_failed_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "delete denied");
        let err = Error::CrossVolumeMoveFailed {
            from: PathBuf::from("/vol-a/file"),
            to: PathBuf::from("/vol-b/file"),
            source: io_err,
        };
        let display = format!("{err}");
        assert!(display.contains("cross-volume move"));
        assert!(display.contains("delete denied"));
    }

    #[test]
    fn test_rename_exhausted_display() {
        let err = Error::RenameExhausted {
            path: PathBuf::from("/data/corrupt.db"),
            attempts: 10,
        };
        let display = format!("{err}");
        assert!(display.contains("exhausted"));
        assert!(display.contains("10"));
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Error::from_io(io_err, Path::new("/gone"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_maps_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err = Error::from_io(io_err, Path::new("/restricted"));
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_from_io_keeps_other_kinds() {
        let io_err = io::Error::new(io::ErrorKind::Other, "odd failure");
        let err = Error::from_io(io_err, Path::new("/somewhere"));
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_display() {
        let err = Error::Validation {
            field: "namespace".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("namespace"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u64> {
            Err(Error::PathNotFound {
                path: PathBuf::from("/x"),
            })
        }
        assert!(returns_result().is_err());
    }
}
