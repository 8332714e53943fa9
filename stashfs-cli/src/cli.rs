//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CleanCommand, MoveCommand, PathsCommand, ProtectCommand, PurgeTempCommand, SizeCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting and maintaining stashfs storage.
#[derive(Parser)]
#[command(name = "stashfs")]
#[command(version, about = "Inspect and maintain stashfs storage roots", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "STASHFS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the application namespace
    #[arg(long, value_name = "NS", global = true, env = "STASHFS_NAMESPACE")]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every resolvable storage root
    Paths(PathsCommand),

    /// Print the size of a file in bytes
    Size(SizeCommand),

    /// Delete the contents of a directory
    Clean(CleanCommand),

    /// Remove stale temporary directories left by dead runs
    PurgeTemp(PurgeTempCommand),

    /// Apply a protection class to a path
    Protect(ProtectCommand),

    /// Safely move a file, replicating across volumes when needed
    #[command(name = "move")]
    Move(MoveCommand),
}
