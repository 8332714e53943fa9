//! Resolution of storage roots to absolute paths.

use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fsops;
use crate::path::roots::StorageRoot;
use crate::path::run_tag::{RunTag, TempKind};
use crate::protect::ProtectionManager;

/// Resolves storage roots to stable absolute paths.
///
/// Resolution is deterministic for a given configuration and process run:
/// repeated calls return the identical path. The backing directory is
/// created (with intermediate components) and receives the root's default
/// protection class only when it does not yet exist; resolving an existing
/// root never re-creates or re-protects it.
///
/// Failure to locate an OS base directory is fatal for that storage class
/// ([`Error::DirectoryUnavailable`]); callers should surface it as an
/// application startup failure.
///
/// # Examples
///
/// ```no_run
/// use stashfs::{Config, PathResolver};
///
/// let resolver = PathResolver::new(Config::default());
/// let caches = resolver.caches_dir().unwrap();
/// assert!(caches.is_absolute());
///
/// // The two temporary roots are always distinct directories.
/// let tmp = resolver.temporary_dir().unwrap();
/// let tmp1a = resolver.temporary_dir_accessible_after_first_auth().unwrap();
/// assert_ne!(tmp, tmp1a);
/// ```
pub struct PathResolver {
    config: Config,
    protection: ProtectionManager,
}

impl PathResolver {
    /// Create a resolver using the platform protection mechanism.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let protection = ProtectionManager::platform(config.default_protection());
        Self { config, protection }
    }

    /// Create a resolver with an explicit protection manager.
    #[must_use]
    pub fn with_protection(config: Config, protection: ProtectionManager) -> Self {
        Self { config, protection }
    }

    /// The configuration backing this resolver.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The protection manager applied to newly created roots.
    #[must_use]
    pub fn protection(&self) -> &ProtectionManager {
        &self.protection
    }

    /// Resolve `root`, creating and protecting its directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnavailable`] if the OS provides no base
    /// location for `root` (or shared-data is requested without a group
    /// identifier), or an error if the directory cannot be created or
    /// protected.
    pub fn resolve(&self, root: StorageRoot) -> Result<PathBuf> {
        let path = self.locate(root)?;
        if !path.is_dir() {
            fsops::ensure_directory_exists(&path)?;
            let class = root.default_protection(self.config.default_protection());
            self.protection.protect(&path, class)?;
        }
        Ok(path)
    }

    /// The application documents root.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn documents_dir(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::Documents)
    }

    /// The application library (support data) root.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn library_dir(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::Library)
    }

    /// The root shared with cooperating processes.
    ///
    /// Requires a group identifier (or an explicit `shared_data_dir`
    /// override) in configuration.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn shared_data_dir(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::SharedData)
    }

    /// The caches root.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn caches_dir(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::Caches)
    }

    /// This run's temporary directory (denied while the device is locked).
    ///
    /// Prefer this over the first-auth variant unless the data must be
    /// reachable while the device is still locked.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn temporary_dir(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::TempUnlocked)
    }

    /// This run's temporary directory that stays accessible after the first
    /// unlock, even if the process restarts before unlock completes.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn temporary_dir_accessible_after_first_auth(&self) -> Result<PathBuf> {
        self.resolve(StorageRoot::TempFirstAuth)
    }

    /// Compute the absolute path for `root` without touching the disk.
    fn locate(&self, root: StorageRoot) -> Result<PathBuf> {
        let namespace = self.config.namespace();
        match root {
            StorageRoot::Documents => {
                if let Some(dir) = &self.config.documents_dir {
                    return Ok(dir.clone());
                }
                let base = dirs::document_dir()
                    .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
                    .ok_or_else(|| unavailable(root, "no documents or home directory"))?;
                Ok(base.join(namespace))
            }
            StorageRoot::Library => {
                if let Some(dir) = &self.config.library_dir {
                    return Ok(dir.clone());
                }
                let base =
                    dirs::data_dir().ok_or_else(|| unavailable(root, "no data directory"))?;
                Ok(base.join(namespace))
            }
            StorageRoot::SharedData => {
                if let Some(dir) = &self.config.shared_data_dir {
                    return Ok(dir.clone());
                }
                let group = self
                    .config
                    .group_identifier
                    .as_deref()
                    .ok_or_else(|| unavailable(root, "no group identifier configured"))?;
                let base =
                    dirs::data_dir().ok_or_else(|| unavailable(root, "no data directory"))?;
                Ok(base.join(group))
            }
            StorageRoot::Caches => {
                if let Some(dir) = &self.config.caches_dir {
                    return Ok(dir.clone());
                }
                let base =
                    dirs::cache_dir().ok_or_else(|| unavailable(root, "no cache directory"))?;
                Ok(base.join(namespace))
            }
            StorageRoot::TempUnlocked => Ok(env::temp_dir()
                .join(TempKind::Unlocked.dir_name(namespace, RunTag::current()))),
            StorageRoot::TempFirstAuth => Ok(env::temp_dir()
                .join(TempKind::FirstAuth.dir_name(namespace, RunTag::current()))),
        }
    }
}

fn unavailable(root: StorageRoot, reason: &str) -> Error {
    Error::DirectoryUnavailable {
        root,
        reason: reason.to_string(),
    }
}
