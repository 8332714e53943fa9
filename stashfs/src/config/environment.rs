//! Environment variable handling for configuration overrides.
//!
//! `STASHFS_*` environment variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::protect::ProtectionClass;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use stashfs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// Reads the `STASHFS_*` variables and applies them with higher
    /// precedence than file-based configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a variable carries an invalid value
    /// (for example, an unrecognized protection class).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(namespace) = env::var("STASHFS_NAMESPACE") {
            config.namespace = Some(namespace);
        }

        if let Ok(group) = env::var("STASHFS_GROUP_ID") {
            config.group_identifier = Some(group);
        }

        if let Ok(class) = env::var("STASHFS_DEFAULT_PROTECTION") {
            config.default_protection =
                Some(class.parse().map_err(|_| Error::Validation {
                    field: "STASHFS_DEFAULT_PROTECTION".into(),
                    message: format!("unrecognized protection class '{class}'"),
                })?);
        }

        if let Ok(dir) = env::var("STASHFS_DOCUMENTS_DIR") {
            config.documents_dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = env::var("STASHFS_LIBRARY_DIR") {
            config.library_dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = env::var("STASHFS_SHARED_DATA_DIR") {
            config.shared_data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = env::var("STASHFS_CACHES_DIR") {
            config.caches_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }
}
