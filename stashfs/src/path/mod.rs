//! Storage-root resolution.
//!
//! Every piece of on-disk state lives under one of six storage roots, each
//! with a defined lifecycle and accessibility policy:
//!
//! - [`StorageRoot::Documents`]: user-visible application documents
//! - [`StorageRoot::Library`]: application support data
//! - [`StorageRoot::SharedData`]: storage shared by a group of cooperating
//!   processes (main process plus extensions), keyed by a configured group
//!   identifier
//! - [`StorageRoot::Caches`]: re-creatable cached data
//! - [`StorageRoot::TempUnlocked`]: temporary data, inaccessible while the
//!   device is locked
//! - [`StorageRoot::TempFirstAuth`]: temporary data that must stay
//!   accessible after the first unlock, even across a process restart
//!
//! [`PathResolver`] maps each root to a stable absolute path, creating the
//! backing directory (with its default protection class) on first
//! resolution. The two temporary roots embed a per-process [`RunTag`] in
//! their directory names; directories bearing another process run's tag are
//! stale and eligible for purging by the janitor.

pub mod resolver;
pub mod roots;
pub mod run_tag;

pub use resolver::PathResolver;
pub use roots::StorageRoot;
pub use run_tag::{parse_temp_dir_name, RunTag, TempKind};
