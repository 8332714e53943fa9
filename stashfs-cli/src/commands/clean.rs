//! Clean command implementation.
//!
//! This module implements the `clean` command, which removes the contents
//! of a directory while leaving the directory itself in place.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use stashfs::DirectoryJanitor;

/// Delete the contents of a directory.
#[derive(Args)]
pub struct CleanCommand {
    /// Directory whose contents should be removed
    pub dir: PathBuf,

    /// Perform a dry run (show what would be removed without removing)
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.dry_run && !global.quiet {
            eprintln!("[DRY RUN] Scanning {}...", self.dir.display());
        }

        let outcome = DirectoryJanitor::delete_contents(&self.dir, self.dry_run)?;

        if global.quiet {
            // Quiet mode: just the count to stdout
            if outcome.removed_count > 0 {
                println!("{}", outcome.removed_count);
            }
        } else if self.dry_run {
            eprintln!("[DRY RUN] Would remove {} entr(ies)", outcome.removed_count);
        } else {
            eprintln!("Removed {} entr(ies)", outcome.removed_count);
        }

        if global.verbose {
            for failure in &outcome.failures {
                eprintln!("  failed: {} ({})", failure.path.display(), failure.reason);
            }
        }

        if outcome.fully_succeeded() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} entr(ies) could not be removed",
                outcome.failures.len()
            )))
        }
    }
}
