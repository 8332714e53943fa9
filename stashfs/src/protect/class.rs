//! Protection class definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A device-level data-protection class.
///
/// Protection classes control when file content is accessible relative to
/// the device lock state. They are ordered here from most to least
/// restrictive. On filesystems without a protection attribute the three
/// protected classes all map to owner-only access; the class still travels
/// through configuration so platforms with a real mechanism can
/// differentiate.
///
/// # Examples
///
/// ```
/// use stashfs::ProtectionClass;
///
/// let class: ProtectionClass = "complete-unless-open".parse().unwrap();
/// assert_eq!(class, ProtectionClass::CompleteUnlessOpen);
/// assert!(class.restricts_access());
/// assert!(!ProtectionClass::None.restricts_access());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtectionClass {
    /// Content is accessible only while the device is unlocked.
    Complete,
    /// Content opened while unlocked stays accessible after locking; no new
    /// access while locked.
    CompleteUnlessOpen,
    /// Content is accessible any time after the first unlock following boot.
    ///
    /// This is the default for application files: it keeps data reachable
    /// when a background relaunch happens before the user unlocks.
    #[default]
    CompleteUntilFirstAuth,
    /// No access restriction.
    None,
}

impl ProtectionClass {
    /// All classes, most restrictive first.
    pub const ALL: [Self; 4] = [
        Self::Complete,
        Self::CompleteUnlessOpen,
        Self::CompleteUntilFirstAuth,
        Self::None,
    ];

    /// Canonical kebab-case name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::CompleteUnlessOpen => "complete-unless-open",
            Self::CompleteUntilFirstAuth => "complete-until-first-auth",
            Self::None => "none",
        }
    }

    /// Whether this class restricts access at all.
    #[must_use]
    pub const fn restricts_access(self) -> bool {
        !matches!(self, Self::None)
    }

    /// POSIX permission mode for a regular file of this class.
    #[must_use]
    pub const fn file_mode(self) -> u32 {
        if self.restricts_access() {
            0o600
        } else {
            0o644
        }
    }

    /// POSIX permission mode for a directory of this class.
    #[must_use]
    pub const fn dir_mode(self) -> u32 {
        if self.restricts_access() {
            0o700
        } else {
            0o755
        }
    }
}

impl fmt::Display for ProtectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtectionClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::Validation {
                field: "protection class".to_string(),
                message: format!("unrecognized value '{s}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_auth() {
        assert_eq!(
            ProtectionClass::default(),
            ProtectionClass::CompleteUntilFirstAuth
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for class in ProtectionClass::ALL {
            let parsed: ProtectionClass = class.as_str().parse().unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: ProtectionClass = "Complete-Unless-Open".parse().unwrap();
        assert_eq!(parsed, ProtectionClass::CompleteUnlessOpen);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("partial".parse::<ProtectionClass>().is_err());
        assert!("".parse::<ProtectionClass>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let yaml = serde_yaml::to_string(&ProtectionClass::CompleteUntilFirstAuth).unwrap();
        assert!(yaml.contains("complete-until-first-auth"));

        let parsed: ProtectionClass = serde_yaml::from_str("complete\n").unwrap();
        assert_eq!(parsed, ProtectionClass::Complete);
    }

    #[test]
    fn test_modes() {
        assert_eq!(ProtectionClass::Complete.file_mode(), 0o600);
        assert_eq!(ProtectionClass::Complete.dir_mode(), 0o700);
        assert_eq!(ProtectionClass::None.file_mode(), 0o644);
        assert_eq!(ProtectionClass::None.dir_mode(), 0o755);
    }
}
