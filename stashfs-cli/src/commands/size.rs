//! Size command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use stashfs::fsops::file_size;

/// Print the size of a file in bytes.
#[derive(Args)]
pub struct SizeCommand {
    /// File to measure
    pub path: PathBuf,
}

impl SizeCommand {
    /// Execute the size command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match file_size(&self.path)? {
            Some(size) => {
                println!("{size}");
                Ok(())
            }
            None => {
                println!("absent");
                Err(CliError::SemanticFailure(format!(
                    "no file at {}",
                    self.path.display()
                )))
            }
        }
    }
}
