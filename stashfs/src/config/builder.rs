//! Configuration assembly with source layering.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Assembles configuration from files, the environment, and programmatic
/// overrides, then validates the result.
///
/// # Examples
///
/// ```
/// use stashfs::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         namespace: Some("my-app".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.namespace(), "my-app");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load an explicit configuration file (layered above the user
    /// config file).
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Skip all configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer programmatic overrides above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested file cannot be read or parsed, an
    /// environment variable carries an invalid value, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config()? {
                config.merge_from(user);
            }
            if let Some(path) = &self.config_file {
                config.merge_from(ConfigLoader::load_file(path)?);
            }
        } else if let Some(path) = &self.config_file {
            // An explicitly requested file is honored even when discovery
            // is disabled.
            config.merge_from(ConfigLoader::load_file(path)?);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
