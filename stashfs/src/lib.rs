#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # stashfs
//!
//! A library for managing protected on-disk storage locations.
//!
//! stashfs resolves stable root directories for distinct storage lifecycles
//! (documents, library, shared-group data, caches, and two flavors of
//! temporary storage), applies device-style data-protection classes to files
//! and directories, and performs structural filesystem operations (move,
//! randomized rename, creation, size queries, bulk cleanup) with defined
//! failure semantics instead of undefined behavior on partial completion.
//!
//! ## Core Types
//!
//! - [`StorageRoot`] and [`PathResolver`]: lifecycle-class directory resolution
//! - [`ProtectionClass`] and [`ProtectionManager`]: data-protection policy
//! - [`DirectoryJanitor`]: best-effort cleanup of directory contents and
//!   stale temporary directories
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use stashfs::{Config, PathResolver, StorageRoot};
//!
//! let resolver = PathResolver::new(Config::default());
//!
//! // Resolving a root creates the directory (with its default protection
//! // class) on first use; later calls return the identical path.
//! let caches = resolver.resolve(StorageRoot::Caches).unwrap();
//! assert_eq!(resolver.resolve(StorageRoot::Caches).unwrap(), caches);
//! ```

pub mod config;
pub mod error;
pub mod fsops;
pub mod janitor;
pub mod logging;
pub mod path;
pub mod protect;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use janitor::{ClearOutcome, DirectoryJanitor, PurgeOutcome};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, RunTag, StorageRoot, TempKind};
pub use protect::{ProtectSweep, ProtectionBackend, ProtectionClass, ProtectionManager};
