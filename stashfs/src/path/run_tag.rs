//! Per-process run identifiers and the temporary directory naming scheme.
//!
//! Temporary root directories carry the run tag of the process that created
//! them in their name: `<namespace>-tmp-<tag>` for the unlocked root and
//! `<namespace>-tmp1a-<tag>` for the first-auth root. Staleness is therefore
//! decidable from `read_dir` alone: a directory whose tag differs from the
//! current process's tag belongs to a dead run and may be purged.

use std::sync::OnceLock;

use uuid::Uuid;

use crate::error::{Error, Result};

/// Identifier of a single process run.
///
/// Generated once per process (see [`RunTag::current`]); two processes, or
/// two runs of the same process, never share a tag.
///
/// # Examples
///
/// ```
/// use stashfs::RunTag;
///
/// let current = RunTag::current();
/// assert_eq!(RunTag::current(), current);
///
/// let other = RunTag::new("f00dfeed").unwrap();
/// assert_ne!(&other, current);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunTag(String);

static CURRENT: OnceLock<RunTag> = OnceLock::new();

impl RunTag {
    /// The current process run's tag.
    ///
    /// Generated on first use and stable for the process lifetime.
    #[must_use]
    pub fn current() -> &'static Self {
        CURRENT.get_or_init(|| Self(Uuid::new_v4().simple().to_string()))
    }

    /// Construct a tag from a raw string.
    ///
    /// Tags are embedded in directory names, so only non-empty ASCII
    /// alphanumeric strings are accepted.
    ///
    /// # Errors
    ///
    /// Returns a validation error for anything else.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Validation {
                field: "run tag".to_string(),
                message: format!("'{raw}' must be non-empty ASCII alphanumeric"),
            });
        }
        Ok(Self(raw))
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which flavor of temporary root a directory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempKind {
    /// Denied while the device is locked (`-tmp-` infix).
    Unlocked,
    /// Accessible after first unlock (`-tmp1a-` infix).
    FirstAuth,
}

impl TempKind {
    /// Naming infix distinguishing the two flavors.
    #[must_use]
    pub const fn infix(self) -> &'static str {
        match self {
            Self::Unlocked => "tmp",
            Self::FirstAuth => "tmp1a",
        }
    }

    /// Directory name for this flavor under the OS temp location.
    #[must_use]
    pub fn dir_name(self, namespace: &str, tag: &RunTag) -> String {
        format!("{namespace}-{}-{}", self.infix(), tag.as_str())
    }
}

/// Parse a directory name produced by [`TempKind::dir_name`].
///
/// Returns `None` for names outside the scheme (including other
/// namespaces), so scanners can simply skip them.
///
/// # Examples
///
/// ```
/// use stashfs::path::{parse_temp_dir_name, RunTag, TempKind};
///
/// let tag = RunTag::new("abc123").unwrap();
/// let name = TempKind::FirstAuth.dir_name("stashfs", &tag);
/// let (kind, parsed) = parse_temp_dir_name("stashfs", &name).unwrap();
/// assert_eq!(kind, TempKind::FirstAuth);
/// assert_eq!(parsed, tag);
/// ```
#[must_use]
pub fn parse_temp_dir_name(namespace: &str, name: &str) -> Option<(TempKind, RunTag)> {
    for kind in [TempKind::Unlocked, TempKind::FirstAuth] {
        let prefix = format!("{namespace}-{}-", kind.infix());
        if let Some(raw) = name.strip_prefix(&prefix) {
            if let Ok(tag) = RunTag::new(raw) {
                return Some((kind, tag));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_stable() {
        let first = RunTag::current();
        let second = RunTag::current();
        assert_eq!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_tags() {
        assert!(RunTag::new("").is_err());
        assert!(RunTag::new("has-dash").is_err());
        assert!(RunTag::new("has/slash").is_err());
        assert!(RunTag::new("ok123").is_ok());
    }

    #[test]
    fn test_dir_name_round_trip() {
        let tag = RunTag::new("deadbeef01").unwrap();
        for kind in [TempKind::Unlocked, TempKind::FirstAuth] {
            let name = kind.dir_name("app", &tag);
            let (parsed_kind, parsed_tag) = parse_temp_dir_name("app", &name).unwrap();
            assert_eq!(parsed_kind, kind);
            assert_eq!(parsed_tag, tag);
        }
    }

    #[test]
    fn test_parse_rejects_foreign_names() {
        assert!(parse_temp_dir_name("app", "unrelated").is_none());
        assert!(parse_temp_dir_name("app", "other-tmp-abc").is_none());
        assert!(parse_temp_dir_name("app", "app-tmp-").is_none());
        assert!(parse_temp_dir_name("app", "app-tmp-bad/tag").is_none());
    }

    #[test]
    fn test_flavors_do_not_collide() {
        // "-tmp-" must never match a "-tmp1a-" name.
        let tag = RunTag::new("abc").unwrap();
        let name = TempKind::FirstAuth.dir_name("app", &tag);
        let (kind, _) = parse_temp_dir_name("app", &name).unwrap();
        assert_eq!(kind, TempKind::FirstAuth);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any alphanumeric tag survives a format/parse round trip.
            #[test]
            fn dir_name_round_trips(raw in "[a-z0-9]{1,32}", ns in "[a-z][a-z0-9]{0,12}") {
                let tag = RunTag::new(raw).unwrap();
                for kind in [TempKind::Unlocked, TempKind::FirstAuth] {
                    let name = kind.dir_name(&ns, &tag);
                    let parsed = parse_temp_dir_name(&ns, &name);
                    prop_assert_eq!(parsed, Some((kind, tag.clone())));
                }
            }

            /// Parsing never panics on arbitrary names.
            #[test]
            fn parse_never_panics(name in ".{0,64}") {
                let _ = parse_temp_dir_name("app", &name);
            }
        }
    }
}
