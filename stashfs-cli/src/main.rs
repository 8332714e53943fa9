//! Main entry point for the stashfs CLI.
//!
//! This is the command-line interface for the stashfs storage layer.
//! It provides maintenance commands over the library operations:
//! - `paths`: Show every resolvable storage root
//! - `size`: Query a file's size
//! - `clean`: Delete the contents of a directory
//! - `purge-temp`: Remove stale temporary directories
//! - `protect`: Apply a protection class to a path
//! - `move`: Safely move a file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = stashfs::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config,
        namespace: cli.namespace,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Size(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::PurgeTemp(cmd) => cmd.execute(&global),
        cli::Command::Protect(cmd) => cmd.execute(&global),
        cli::Command::Move(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
