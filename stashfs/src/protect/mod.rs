//! Data-protection policy for files and directories.
//!
//! A [`ProtectionClass`] names when file content should be accessible
//! relative to the device lock state. On platforms with an OS-level file
//! protection attribute the class is applied directly; on POSIX systems it
//! degrades to owner-only permission bits, and on platforms with neither
//! concept it degrades to a documented no-op success. The
//! [`ProtectionManager`] hides that choice behind the [`ProtectionBackend`]
//! trait so calling code never branches on platform.
//!
//! Single-path protection fails fast; [`ProtectionManager::protect_recursive`]
//! is best-effort and reports a [`ProtectSweep`] aggregate instead of
//! aborting on the first descendant that cannot be protected.

pub mod class;
pub mod manager;

pub use class::ProtectionClass;
pub use manager::{
    NoopBackend, ProtectSweep, ProtectionBackend, ProtectionManager, SweepFailure,
};

#[cfg(unix)]
pub use manager::PosixBackend;
