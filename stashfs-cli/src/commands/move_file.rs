//! Move command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use stashfs::fsops::move_file;

/// Safely move a file, replicating across volumes when needed.
#[derive(Args)]
pub struct MoveCommand {
    /// Source file
    pub from: PathBuf,

    /// Destination path (must not exist)
    pub to: PathBuf,
}

impl MoveCommand {
    /// Execute the move command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        move_file(&self.from, &self.to)?;

        if !global.quiet {
            eprintln!("Moved {} -> {}", self.from.display(), self.to.display());
        }
        Ok(())
    }
}
