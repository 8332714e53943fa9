//! Protect command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use stashfs::{ProtectionClass, ProtectionManager};

/// Apply a protection class to a path.
#[derive(Args)]
pub struct ProtectCommand {
    /// Path to protect
    pub path: PathBuf,

    /// Protection class (complete, complete-unless-open,
    /// complete-until-first-auth, none); defaults to the configured class
    #[arg(long, value_name = "CLASS")]
    pub class: Option<String>,

    /// Also apply the class to every descendant, best-effort
    #[arg(long)]
    pub recursive: bool,
}

impl ProtectCommand {
    /// Execute the protect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let class = match self.class.as_deref() {
            Some(raw) => raw
                .parse::<ProtectionClass>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
            None => config.default_protection(),
        };

        // The sweep applies the manager's default class, so the requested
        // class becomes the default for this invocation.
        let manager = ProtectionManager::platform(class);
        if !manager.supported() && !global.quiet {
            eprintln!("Note: protection classes have no effect on this platform");
        }

        manager.protect(&self.path, class)?;
        if !self.recursive {
            if !global.quiet {
                eprintln!("Protected {} as {class}", self.path.display());
            }
            return Ok(());
        }

        let sweep = manager.protect_recursive(&self.path)?;
        if !global.quiet {
            eprintln!(
                "Protected {} and {} descendant(s) as {class}",
                self.path.display(),
                sweep.applied_count
            );
        }
        if global.verbose {
            for failure in &sweep.failures {
                eprintln!("  failed: {} ({})", failure.path.display(), failure.reason);
            }
        }

        if sweep.fully_succeeded() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} entr(ies) could not be protected",
                sweep.failed_count()
            )))
        }
    }
}
