//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads YAML configuration files.
///
/// # Examples
///
/// ```no_run
/// use stashfs::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("/etc/stashfs.yaml")).unwrap();
/// println!("namespace: {}", config.namespace());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the user-scope configuration file, if the OS provides a
    /// config directory (`<config dir>/stashfs/config.yaml`).
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stashfs").join("config.yaml"))
    }

    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if the file is absent, or a
    /// configuration error if the YAML does not match the schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the user-scope configuration file if it exists.
    ///
    /// A missing file (or a platform without a config directory) is not an
    /// error; it simply contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file exists but cannot be read or
    /// parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        let Some(path) = Self::user_config_path() else {
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_file_parses_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "namespace: loaded").unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.namespace(), "loaded");
    }

    #[test]
    fn test_load_file_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = ConfigLoader::load_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_file_rejects_bad_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "namespace: [unterminated").unwrap();
        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with("stashfs/config.yaml"));
        }
    }
}
