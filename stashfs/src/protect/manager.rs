//! Protection application and recursive sweeps.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::protect::ProtectionClass;

/// Platform mechanism for applying a protection class to a single entry.
///
/// The backend is only invoked for paths that are known to exist; existence
/// checking and recursion live in [`ProtectionManager`].
pub trait ProtectionBackend: Send + Sync {
    /// Apply `class` to the entry at `path`.
    ///
    /// Re-applying the class an entry already carries must succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute cannot be set (for example,
    /// permission denied).
    fn apply(&self, path: &Path, class: ProtectionClass) -> Result<()>;

    /// Whether this backend actually changes anything on disk.
    fn supported(&self) -> bool;
}

/// POSIX backend: protection classes degrade to permission bits.
///
/// Protected classes become owner-only access (0o600 files, 0o700
/// directories); [`ProtectionClass::None`] restores the conventional
/// world-readable modes. Lock-state-dependent decryption cannot be
/// expressed, so the three protected classes are indistinguishable here.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixBackend;

#[cfg(unix)]
impl ProtectionBackend for PosixBackend {
    fn apply(&self, path: &Path, class: ProtectionClass) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::symlink_metadata(path).map_err(|e| Error::from_io(e, path))?;
        let mode = if metadata.is_dir() {
            class.dir_mode()
        } else {
            class.file_mode()
        };
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| Error::from_io(e, path))
    }

    fn supported(&self) -> bool {
        true
    }
}

/// No-op backend for platforms without a protection concept.
///
/// Applying any class reports success without touching the filesystem; this
/// is the documented degradation, not a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl ProtectionBackend for NoopBackend {
    fn apply(&self, _path: &Path, _class: ProtectionClass) -> Result<()> {
        Ok(())
    }

    fn supported(&self) -> bool {
        false
    }
}

/// A single failed entry from a recursive protection sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    /// The entry that could not be protected.
    pub path: PathBuf,
    /// Why it could not be protected.
    pub reason: String,
}

/// Aggregate outcome of [`ProtectionManager::protect_recursive`].
///
/// A sweep continues past per-entry failures; callers needing best-effort
/// coverage inspect the counts rather than receiving an early error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectSweep {
    /// Number of entries the class was applied to.
    pub applied_count: usize,
    /// Entries that could not be protected.
    pub failures: Vec<SweepFailure>,
}

impl ProtectSweep {
    /// Whether every enumerated entry was protected.
    #[must_use]
    pub fn fully_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of entries that could not be protected.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    fn record_failure(&mut self, path: &Path, err: &Error) {
        log::warn!("could not protect {}: {err}", path.display());
        self.failures.push(SweepFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }
}

/// Applies and queries protection classes on files and directories.
///
/// # Examples
///
/// ```no_run
/// use stashfs::{ProtectionClass, ProtectionManager};
/// use std::path::Path;
///
/// let manager = ProtectionManager::platform(ProtectionClass::default());
/// manager.protect(Path::new("/var/lib/app/secret.db"), ProtectionClass::Complete).unwrap();
///
/// let sweep = manager.protect_recursive(Path::new("/var/lib/app")).unwrap();
/// if !sweep.fully_succeeded() {
///     eprintln!("{} entries left unprotected", sweep.failed_count());
/// }
/// ```
pub struct ProtectionManager {
    backend: Box<dyn ProtectionBackend>,
    default_class: ProtectionClass,
}

impl ProtectionManager {
    /// Creates a manager with the backend appropriate for this platform.
    #[must_use]
    pub fn platform(default_class: ProtectionClass) -> Self {
        #[cfg(unix)]
        let backend: Box<dyn ProtectionBackend> = Box::new(PosixBackend);
        #[cfg(not(unix))]
        let backend: Box<dyn ProtectionBackend> = Box::new(NoopBackend);

        Self {
            backend,
            default_class,
        }
    }

    /// Creates a manager with an explicit backend.
    ///
    /// Used by tests to inject failing backends, and by embedders with their
    /// own protection mechanism.
    #[must_use]
    pub fn with_backend(backend: Box<dyn ProtectionBackend>, default_class: ProtectionClass) -> Self {
        Self {
            backend,
            default_class,
        }
    }

    /// The class applied when no explicit class is given.
    #[must_use]
    pub fn default_class(&self) -> ProtectionClass {
        self.default_class
    }

    /// Whether protection has any effect on this platform.
    #[must_use]
    pub fn supported(&self) -> bool {
        self.backend.supported()
    }

    /// Sets the protection class on a single file or directory entry.
    ///
    /// Does not create the path. Re-applying the class an entry already
    /// carries is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if `path` is absent, or
    /// [`Error::PermissionDenied`] if the attribute cannot be set.
    pub fn protect(&self, path: &Path, class: ProtectionClass) -> Result<()> {
        // Existence is part of the contract on every platform, including the
        // no-op backend.
        fs::symlink_metadata(path).map_err(|e| Error::from_io(e, path))?;
        self.backend.apply(path, class)
    }

    /// Sets the configured default protection class on a single entry.
    ///
    /// # Errors
    ///
    /// Same as [`ProtectionManager::protect`].
    pub fn protect_default(&self, path: &Path) -> Result<()> {
        self.protect(path, self.default_class)
    }

    /// Applies the default class to every descendant of `path`, best-effort.
    ///
    /// Entries added after the call are not covered; callers re-apply or
    /// rely on the inherited default at creation time. Per-entry failures
    /// (including unreadable subdirectories) are logged and collected into
    /// the returned [`ProtectSweep`]; the walk always continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when `path` itself is absent or cannot be read
    /// at all.
    pub fn protect_recursive(&self, path: &Path) -> Result<ProtectSweep> {
        let metadata = fs::symlink_metadata(path).map_err(|e| Error::from_io(e, path))?;

        let mut sweep = ProtectSweep::default();
        if metadata.is_dir() {
            self.sweep_dir(path, &mut sweep)?;
        }
        log::debug!(
            "protected {} entr(ies) under {} ({} failed)",
            sweep.applied_count,
            path.display(),
            sweep.failed_count()
        );
        Ok(sweep)
    }

    fn sweep_dir(&self, dir: &Path, sweep: &mut ProtectSweep) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                // An unreadable subdirectory is a per-item failure for the
                // directory itself; the rest of the tree is still swept.
                sweep.record_failure(dir, &Error::from_io(e, dir));
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    sweep.record_failure(dir, &Error::Io(e));
                    continue;
                }
            };
            let path = entry.path();

            match self.backend.apply(&path, self.default_class) {
                Ok(()) => sweep.applied_count += 1,
                Err(e) => sweep.record_failure(&path, &e),
            }

            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir() && !t.is_symlink())
                .unwrap_or(false);
            if is_dir {
                self.sweep_dir(&path, sweep)?;
            }
        }
        Ok(())
    }
}
