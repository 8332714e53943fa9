//! Configuration system for stashfs.
//!
//! Configuration controls how storage roots resolve: the namespace directory
//! created under each OS base location, the group identifier for shared-data
//! storage, optional per-root path overrides, and the default protection
//! class applied to newly created roots.
//!
//! # Configuration Precedence
//!
//! Sources are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`STASHFS_*`)
//! 3. An explicit config file (via [`ConfigBuilder::with_config_file`])
//! 4. The user config file (`<config dir>/stashfs/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Defaults only:
//!
//! ```
//! use stashfs::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .build()
//!     .unwrap();
//! assert_eq!(config.namespace(), "stashfs");
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use stashfs::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     group_identifier: Some("group.example.app".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.group_identifier.as_deref(), Some("group.example.app"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, DEFAULT_NAMESPACE};
pub use validator::ConfigValidator;
