//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::protect::ProtectionClass;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "stashfs";

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults.
/// The per-root directory overrides bypass OS base-directory lookup
/// entirely, which is also how tests isolate themselves from the real
/// home directory.
///
/// # Examples
///
/// ```
/// use stashfs::config::Config;
///
/// let config = Config {
///     namespace: Some("my-app".to_string()),
///     group_identifier: Some("group.example.my-app".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.namespace(), "my-app");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory name created under each OS base location.
    pub namespace: Option<String>,

    /// Identifier of the group of cooperating processes sharing the
    /// shared-data root. Required to resolve that root unless
    /// `shared_data_dir` is set.
    pub group_identifier: Option<String>,

    /// Protection class applied to newly created roots and by
    /// recursive protection sweeps. Defaults to
    /// `complete-until-first-auth`.
    pub default_protection: Option<ProtectionClass>,

    /// Override for the documents root (used verbatim).
    pub documents_dir: Option<PathBuf>,

    /// Override for the library root (used verbatim).
    pub library_dir: Option<PathBuf>,

    /// Override for the shared-data root (used verbatim; makes
    /// `group_identifier` unnecessary).
    pub shared_data_dir: Option<PathBuf>,

    /// Override for the caches root (used verbatim).
    pub caches_dir: Option<PathBuf>,
}

impl Config {
    /// The effective namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// The effective default protection class.
    #[must_use]
    pub fn default_protection(&self) -> ProtectionClass {
        self.default_protection.unwrap_or_default()
    }

    /// Overlay `layer` on top of `self`: set fields in `layer` win.
    pub(crate) fn merge_from(&mut self, layer: Config) {
        if layer.namespace.is_some() {
            self.namespace = layer.namespace;
        }
        if layer.group_identifier.is_some() {
            self.group_identifier = layer.group_identifier;
        }
        if layer.default_protection.is_some() {
            self.default_protection = layer.default_protection;
        }
        if layer.documents_dir.is_some() {
            self.documents_dir = layer.documents_dir;
        }
        if layer.library_dir.is_some() {
            self.library_dir = layer.library_dir;
        }
        if layer.shared_data_dir.is_some() {
            self.shared_data_dir = layer.shared_data_dir;
        }
        if layer.caches_dir.is_some() {
            self.caches_dir = layer.caches_dir;
        }
    }
}
