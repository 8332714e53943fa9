//! Purge-temp command implementation.
//!
//! This module implements the `purge-temp` command, which removes the
//! temporary directories left behind by previous runs while keeping the
//! current run's directories intact.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use stashfs::DirectoryJanitor;

/// Remove stale temporary directories left by dead runs.
#[derive(Args)]
pub struct PurgeTempCommand {
    /// Perform a dry run (show what would be removed without removing)
    #[arg(long)]
    pub dry_run: bool,
}

impl PurgeTempCommand {
    /// Execute the purge-temp command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let outcome =
            DirectoryJanitor::clear_old_temporary_directories(config.namespace(), self.dry_run);

        if global.quiet {
            if !outcome.purged.is_empty() {
                println!("{}", outcome.purged.len());
            }
        } else if self.dry_run {
            eprintln!(
                "[DRY RUN] Would purge {} stale temp director(ies), keeping {}",
                outcome.purged.len(),
                outcome.kept_count
            );
        } else {
            eprintln!(
                "Purged {} stale temp director(ies), kept {}",
                outcome.purged.len(),
                outcome.kept_count
            );
        }

        if global.verbose {
            for dir in &outcome.purged {
                eprintln!("  - {}", dir.display());
            }
            for failure in &outcome.failures {
                eprintln!("  failed: {} ({})", failure.path.display(), failure.reason);
            }
        }

        if outcome.fully_succeeded() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} stale director(ies) could not be removed",
                outcome.failures.len()
            )))
        }
    }
}
