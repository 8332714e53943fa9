//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! hierarchical configuration loading and resolver construction.

use crate::error::CliError;
use std::path::PathBuf;
use stashfs::{Config, ConfigBuilder, PathResolver};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity fields are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file to load.
    pub config_file: Option<PathBuf>,

    /// Override the application namespace.
    pub namespace: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config_file {
        builder = builder.with_config_file(path);
    }
    if let Some(namespace) = &global.namespace {
        builder = builder.with_config(Config {
            namespace: Some(namespace.clone()),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Construct a resolver over the loaded configuration.
pub fn build_resolver(global: &GlobalOptions) -> Result<PathResolver, CliError> {
    Ok(PathResolver::new(load_configuration(global)?))
}
