//! Logging infrastructure for the stashfs library.
//!
//! Best-effort operations in this crate (directory sweeps, recursive
//! protection) report per-item failures through the `log` crate facade.
//! This module additionally provides a small stderr logger with explicit
//! verbosity levels for binaries that do not install a `log` backend.

use std::env;
use std::fmt;

use crate::error::Error;

/// Verbosity level for stderr output.
///
/// Levels are ordered from least verbose (`Quiet`) to most verbose
/// (`Verbose`).
///
/// # Examples
///
/// ```
/// use stashfs::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings only.
    Normal,
    /// Errors, warnings, and per-item detail.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes `"quiet"`, `"normal"`, and `"verbose"`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(Error::Validation {
                field: "log level".to_string(),
                message: format!("unrecognized value '{s}'"),
            }),
        }
    }
}

/// A stderr logger gated on a [`LogLevel`].
///
/// # Examples
///
/// ```
/// use stashfs::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("cache sweep left 2 entries behind");
/// logger.detail("this only appears at verbose level");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether per-item detail should be emitted.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        matches!(self.level, LogLevel::Verbose)
    }

    /// Logs an error message (suppressed only at `Quiet`).
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message (suppressed only at `Quiet`).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs a per-item detail message (emitted only at `Verbose`).
    pub fn detail(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// Priority order: the `verbose`/`quiet` flags, then the
/// `STASHFS_LOG_MODE` environment variable, then `Normal`. If both flags
/// are set, `verbose` wins.
///
/// # Examples
///
/// ```
/// use stashfs::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("STASHFS_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_ordering_and_display() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("NORMAL").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("Verbose").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("chatty").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_levels() {
        let logger = Logger::new(LogLevel::Verbose);
        assert_eq!(logger.level(), LogLevel::Verbose);
        assert!(logger.is_verbose());
        assert!(!Logger::default().is_verbose());
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        // Verbose takes precedence when both flags are set.
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let saved = env::var("STASHFS_LOG_MODE").ok();

        env::set_var("STASHFS_LOG_MODE", "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var("STASHFS_LOG_MODE", "not-a-level");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        // Flags override the environment.
        env::set_var("STASHFS_LOG_MODE", "normal");
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);

        match saved {
            Some(val) => env::set_var("STASHFS_LOG_MODE", val),
            None => env::remove_var("STASHFS_LOG_MODE"),
        }
    }
}
