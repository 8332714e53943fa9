//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment: every storage root, the OS temp
//! location, and the user configuration directory are redirected into a
//! per-test temporary directory so tests never touch real user storage.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Namespace used by every test environment.
pub const TEST_NAMESPACE: &str = "stashfs-cli-test";

/// Test environment with isolated storage roots.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Configuration file pointing every root into the temp directory
    pub config_path: PathBuf,
    /// Directory the binary sees as the OS temp location
    pub os_temp: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with a written config file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let os_temp = temp_path.join("os-temp");
        std::fs::create_dir_all(&os_temp).expect("Failed to create os temp dir");

        let config_path = temp_path.join("config.yaml");
        let config = format!(
            "namespace: {TEST_NAMESPACE}\n\
             documents_dir: {base}/documents\n\
             library_dir: {base}/library\n\
             shared_data_dir: {base}/shared\n\
             caches_dir: {base}/caches\n",
            base = temp_path.display()
        );
        std::fs::write(&config_path, config).expect("Failed to write config file");

        Self {
            temp_dir,
            temp_path,
            config_path,
            os_temp,
        }
    }

    /// Get a bare command builder with a scrubbed environment.
    ///
    /// Removes the STASHFS_* variables and redirects the user config
    /// directory and the OS temp location into the test environment, so
    /// tests have full control over configuration.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("stashfs").expect("Failed to find stashfs binary");
        cmd.env_remove("STASHFS_CONFIG")
            .env_remove("STASHFS_NAMESPACE")
            .env_remove("STASHFS_LOG_MODE")
            .env_remove("STASHFS_GROUP_ID")
            .env_remove("STASHFS_DEFAULT_PROTECTION")
            .env_remove("STASHFS_DOCUMENTS_DIR")
            .env_remove("STASHFS_LIBRARY_DIR")
            .env_remove("STASHFS_SHARED_DATA_DIR")
            .env_remove("STASHFS_CACHES_DIR")
            .env("XDG_CONFIG_HOME", self.temp_path.join("xdg-config"))
            .env("TMPDIR", &self.os_temp);
        cmd
    }

    /// Get a command builder with the test config file pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under the test environment and return its path.
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Count the immediate children of `dir`.
#[allow(dead_code)]
pub fn child_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
