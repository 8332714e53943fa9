//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `paths`: Show every resolvable storage root
//! - `size`: Print the size of a file in bytes
//! - `clean`: Delete the contents of a directory
//! - `purge_temp`: Remove stale temporary directories
//! - `protect`: Apply a protection class to a path
//! - `move_file`: Safely move a file

pub mod clean;
pub mod move_file;
pub mod paths;
pub mod protect;
pub mod purge_temp;
pub mod size;

pub use clean::CleanCommand;
pub use move_file::MoveCommand;
pub use paths::PathsCommand;
pub use protect::ProtectCommand;
pub use purge_temp::PurgeTempCommand;
pub use size::SizeCommand;
