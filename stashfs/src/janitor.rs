//! Best-effort directory cleanup.
//!
//! The janitor clears directory contents and reclaims temporary directories
//! abandoned by previous process runs. All sweeps are best-effort: partial
//! progress on a large tree beats all-or-nothing, so per-item failures are
//! logged, collected into the returned outcome, and never abort the sweep.
//!
//! Every temporary directory moves through one of two lifecycles:
//! created by the current run (never touched), or stale (bearing another
//! run's tag) and eligible for purge. The janitor only ever deletes
//! directories it can positively identify as stale, so it is safe to run
//! while other process instances are using their own temp roots.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::{parse_temp_dir_name, RunTag};

/// A single failed deletion from a cleanup sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// The entry that could not be removed.
    pub path: PathBuf,
    /// Why it could not be removed.
    pub reason: String,
}

/// Outcome of [`DirectoryJanitor::delete_contents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearOutcome {
    /// Children removed (or counted, in dry-run mode).
    pub removed_count: usize,
    /// Children that could not be removed.
    pub failures: Vec<ItemFailure>,
}

impl ClearOutcome {
    /// Whether every child was removed.
    #[must_use]
    pub fn fully_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of [`DirectoryJanitor::clear_old_temporary_directories`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeOutcome {
    /// Stale directories removed (or, in dry-run mode, that would be).
    pub purged: Vec<PathBuf>,
    /// Directories belonging to the current run, preserved.
    pub kept_count: usize,
    /// Stale directories that could not be removed.
    pub failures: Vec<ItemFailure>,
}

impl PurgeOutcome {
    /// Whether every stale directory was removed.
    #[must_use]
    pub fn fully_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Cleanup operations over directory trees and stale temporary storage.
///
/// # Examples
///
/// ```no_run
/// use stashfs::DirectoryJanitor;
/// use std::path::Path;
///
/// // Typically run at startup: reclaim temp roots left by dead runs.
/// let outcome = DirectoryJanitor::clear_old_temporary_directories("stashfs", false);
/// println!("purged {} stale temp dir(s)", outcome.purged.len());
///
/// // Empty a cache directory without deleting the directory itself.
/// let outcome = DirectoryJanitor::delete_contents(Path::new("/var/cache/app"), false).unwrap();
/// assert!(outcome.fully_succeeded());
/// ```
pub struct DirectoryJanitor;

impl DirectoryJanitor {
    /// Delete all children of `dir`, leaving `dir` itself intact.
    ///
    /// A missing `dir` is treated as already empty and succeeds. With
    /// `dry_run` set, children are counted but nothing is removed. Child
    /// failures are logged and collected; the sweep always continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when `dir` exists but cannot be read.
    pub fn delete_contents(dir: &Path, dry_run: bool) -> Result<ClearOutcome> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ClearOutcome::default()),
            Err(e) => return Err(Error::from_io(e, dir)),
        };

        let mut outcome = ClearOutcome::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    record_failure(&mut outcome.failures, dir, &e);
                    continue;
                }
            };
            let path = entry.path();

            if dry_run {
                outcome.removed_count += 1;
                continue;
            }

            // Symlinks are unlinked, never followed.
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir() && !t.is_symlink())
                .unwrap_or(false);
            let removed = if is_dir {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            match removed {
                Ok(()) => outcome.removed_count += 1,
                Err(e) => record_failure(&mut outcome.failures, &path, &e),
            }
        }

        log::debug!(
            "cleared {} of {} entr(ies) under {}",
            outcome.removed_count,
            outcome.removed_count + outcome.failures.len(),
            dir.display()
        );
        Ok(outcome)
    }

    /// Purge temporary directories left behind by previous process runs.
    ///
    /// Scans the OS temp location for directories matching the temp naming
    /// convention for `namespace`. Directories tagged with the current
    /// run's identifier are preserved; all others are removed (or merely
    /// reported, with `dry_run` set). Nothing matching is a success, never
    /// an error, and per-directory removal failures are collected without
    /// stopping the scan.
    #[must_use]
    pub fn clear_old_temporary_directories(namespace: &str, dry_run: bool) -> PurgeOutcome {
        Self::purge_stale_in(&env::temp_dir(), namespace, dry_run)
    }

    /// [`Self::clear_old_temporary_directories`] over an explicit temp
    /// location, for callers managing their own temp base.
    #[must_use]
    pub fn purge_stale_in(temp_base: &Path, namespace: &str, dry_run: bool) -> PurgeOutcome {
        let current = RunTag::current();
        let mut outcome = PurgeOutcome::default();

        let entries = match fs::read_dir(temp_base) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("cannot scan {}: {e}", temp_base.display());
                return outcome;
            }
        };

        for entry in entries.flatten() {
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let Some((_, tag)) = parse_temp_dir_name(namespace, &name) else {
                continue;
            };
            if tag == *current {
                outcome.kept_count += 1;
                continue;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }

            let path = entry.path();
            if dry_run {
                outcome.purged.push(path);
                continue;
            }
            match fs::remove_dir_all(&path) {
                Ok(()) => {
                    log::debug!("purged stale temp dir {}", path.display());
                    outcome.purged.push(path);
                }
                Err(e) => record_failure(&mut outcome.failures, &path, &e),
            }
        }

        outcome
    }
}

fn record_failure(failures: &mut Vec<ItemFailure>, path: &Path, err: &io::Error) {
    log::warn!("could not remove {}: {err}", path.display());
    failures.push(ItemFailure {
        path: path.to_path_buf(),
        reason: err.to_string(),
    });
}
