//! Fail-safe filesystem operations.
//!
//! Stateless free functions over plain paths: the crate holds no open-file
//! state between calls, and every operation either completes or reports a
//! structured error describing exactly how far it got. Same-volume moves
//! are atomic at the OS level; the cross-volume fallback surfaces its one
//! possible partial state ([`crate::Error::CrossVolumeMoveFailed`]) instead
//! of swallowing it.

pub mod ensure;
pub mod size;
pub mod transfer;

pub use ensure::{ensure_directory_exists, ensure_file_exists};
pub use size::file_size;
pub use transfer::{move_file, rename_with_random_extension, MAX_RENAME_ATTEMPTS};
