//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates assembled configuration before use.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate `config`.
    ///
    /// The namespace and group identifier become single directory names, so
    /// they must be non-empty and must not contain path separators or
    /// traversal components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_name("namespace", config.namespace())?;
        if let Some(group) = &config.group_identifier {
            Self::validate_name("group_identifier", group)?;
        }
        for (field, dir) in [
            ("documents_dir", &config.documents_dir),
            ("library_dir", &config.library_dir),
            ("shared_data_dir", &config.shared_data_dir),
            ("caches_dir", &config.caches_dir),
        ] {
            if let Some(dir) = dir {
                Self::validate_override(field, dir)?;
            }
        }
        Ok(())
    }

    fn validate_name(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.to_string(),
                message: "must be non-empty".to_string(),
            });
        }
        if value.contains(['/', '\\']) || value == "." || value == ".." {
            return Err(Error::Validation {
                field: field.to_string(),
                message: format!("'{value}' must be a single directory name"),
            });
        }
        Ok(())
    }

    fn validate_override(field: &str, dir: &Path) -> Result<()> {
        if !dir.is_absolute() {
            return Err(Error::Validation {
                field: field.to_string(),
                message: format!("'{}' must be an absolute path", dir.display()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        ConfigValidator::validate(&Config::default()).unwrap();
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let config = Config {
            namespace: Some(String::new()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(format!("{err}").contains("namespace"));
    }

    #[test]
    fn test_namespace_with_separator_rejected() {
        for bad in ["a/b", "..", ".", "a\\b"] {
            let config = Config {
                namespace: Some(bad.to_string()),
                ..Default::default()
            };
            assert!(
                ConfigValidator::validate(&config).is_err(),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_group_identifier_validated() {
        let config = Config {
            group_identifier: Some("group/evil".to_string()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(format!("{err}").contains("group_identifier"));
    }

    #[test]
    fn test_relative_override_rejected() {
        let config = Config {
            caches_dir: Some(PathBuf::from("relative/cache")),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(format!("{err}").contains("caches_dir"));
    }

    #[test]
    fn test_dotted_group_identifier_accepted() {
        let config = Config {
            group_identifier: Some("group.example.app".to_string()),
            ..Default::default()
        };
        ConfigValidator::validate(&config).unwrap();
    }
}
