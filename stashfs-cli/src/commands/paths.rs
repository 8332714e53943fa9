//! Paths command implementation.
//!
//! This module implements the `paths` command, which resolves and prints
//! every storage root. Resolution creates missing root directories, so the
//! command doubles as a storage bootstrap for scripts.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::{Args, ValueEnum};
use stashfs::StorageRoot;

/// Output format for the paths listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `name: path` line per root.
    Text,
    /// A single JSON object mapping root names to paths.
    Json,
}

/// Show every resolvable storage root.
#[derive(Args)]
pub struct PathsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        // Roots that cannot resolve on this host (typically shared-data
        // without a group identifier) are reported, not fatal.
        let resolved: Vec<(StorageRoot, Result<std::path::PathBuf, stashfs::Error>)> =
            StorageRoot::ALL
                .into_iter()
                .map(|root| (root, resolver.resolve(root)))
                .collect();

        match self.format {
            OutputFormat::Text => {
                for (root, result) in &resolved {
                    match result {
                        Ok(path) => println!("{root}: {}", path.display()),
                        Err(e) => {
                            if !global.quiet {
                                eprintln!("{root}: unavailable ({e})");
                            }
                        }
                    }
                }
            }
            OutputFormat::Json => {
                let mut object = serde_json::Map::new();
                for (root, result) in &resolved {
                    let value = match result {
                        Ok(path) => serde_json::Value::String(path.display().to_string()),
                        Err(_) => serde_json::Value::Null,
                    };
                    object.insert(root.as_str().to_string(), value);
                }
                println!("{}", serde_json::Value::Object(object));
            }
        }

        Ok(())
    }
}
