//! Storage root lifecycle classes.

use std::fmt;

use crate::protect::ProtectionClass;

/// A storage lifecycle class.
///
/// Each root resolves to exactly one absolute path per process run; the two
/// temporary roots are distinct per-run directories, everything else is
/// stable across runs.
///
/// # Examples
///
/// ```
/// use stashfs::StorageRoot;
///
/// assert!(StorageRoot::TempUnlocked.is_temporary());
/// assert!(!StorageRoot::Documents.is_temporary());
/// assert_eq!(StorageRoot::SharedData.to_string(), "shared-data");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageRoot {
    /// User-visible application documents.
    Documents,
    /// Application support data (library).
    Library,
    /// Storage shared with cooperating processes, keyed by group identifier.
    SharedData,
    /// Re-creatable cached data.
    Caches,
    /// Temporary data, denied while the device is locked.
    TempUnlocked,
    /// Temporary data accessible any time after the first unlock.
    ///
    /// Survives process restarts until explicitly purged by the janitor, so
    /// work started before an unexpected exit can be reclaimed or cleaned
    /// up by the next run.
    TempFirstAuth,
}

impl StorageRoot {
    /// All storage roots.
    pub const ALL: [Self; 6] = [
        Self::Documents,
        Self::Library,
        Self::SharedData,
        Self::Caches,
        Self::TempUnlocked,
        Self::TempFirstAuth,
    ];

    /// Whether this root is per-process-run temporary storage.
    #[must_use]
    pub const fn is_temporary(self) -> bool {
        matches!(self, Self::TempUnlocked | Self::TempFirstAuth)
    }

    /// Protection class applied when the root directory is first created.
    ///
    /// The temporary roots carry fixed classes; caches are unprotected;
    /// everything else uses the configured default.
    #[must_use]
    pub const fn default_protection(self, configured: ProtectionClass) -> ProtectionClass {
        match self {
            Self::TempUnlocked => ProtectionClass::CompleteUnlessOpen,
            Self::TempFirstAuth => ProtectionClass::CompleteUntilFirstAuth,
            Self::Caches => ProtectionClass::None,
            Self::Documents | Self::Library | Self::SharedData => configured,
        }
    }

    /// Stable kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Library => "library",
            Self::SharedData => "shared-data",
            Self::Caches => "caches",
            Self::TempUnlocked => "temp",
            Self::TempFirstAuth => "temp-first-auth",
        }
    }
}

impl fmt::Display for StorageRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_classification() {
        for root in StorageRoot::ALL {
            let expected = matches!(root, StorageRoot::TempUnlocked | StorageRoot::TempFirstAuth);
            assert_eq!(root.is_temporary(), expected, "{root}");
        }
    }

    #[test]
    fn test_default_protection_per_root() {
        let configured = ProtectionClass::Complete;
        assert_eq!(
            StorageRoot::TempUnlocked.default_protection(configured),
            ProtectionClass::CompleteUnlessOpen
        );
        assert_eq!(
            StorageRoot::TempFirstAuth.default_protection(configured),
            ProtectionClass::CompleteUntilFirstAuth
        );
        assert_eq!(
            StorageRoot::Caches.default_protection(configured),
            ProtectionClass::None
        );
        assert_eq!(
            StorageRoot::Documents.default_protection(configured),
            configured
        );
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = StorageRoot::ALL.iter().map(|r| r.as_str()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
