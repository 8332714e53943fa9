//! Common test utilities for integration tests.
//!
//! Provides isolated storage fixtures so tests never touch the real home
//! or cache directories.

use std::path::{Path, PathBuf};

use stashfs::{Config, PathResolver};
use tempfile::TempDir;

/// An isolated storage environment rooted in a temporary directory.
///
/// Every overridable storage root points below the temp directory; the
/// directory is removed when the fixture is dropped.
pub struct StorageFixture {
    /// Keeps the temporary directory alive for the test's duration.
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the isolated storage tree.
    pub base: PathBuf,
    /// Configuration pointing every root below `base`.
    pub config: Config,
}

#[allow(dead_code)]
impl StorageFixture {
    /// Create a fixture with all four stable roots overridden.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let config = Config {
            namespace: Some("stashfs-test".to_string()),
            documents_dir: Some(base.join("documents")),
            library_dir: Some(base.join("library")),
            shared_data_dir: Some(base.join("shared")),
            caches_dir: Some(base.join("caches")),
            ..Default::default()
        };
        Self {
            temp_dir,
            base,
            config,
        }
    }

    /// A resolver over this fixture's configuration.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.config.clone())
    }

    /// Write a small file below `base` and return its path.
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.base.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }
}

/// Count the immediate children of `dir`.
#[allow(dead_code)]
pub fn child_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
