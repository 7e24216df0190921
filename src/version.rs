//! Semantic version parsing and arithmetic for release planning.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::tracker::TrackerError;

/// Matches the first `major.minor.patch` triple anywhere in a string.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap());

/// A three-part semantic version.
///
/// Ordering is lexicographic over `(major, minor, patch)`, so the derived
/// `Ord` compares major first, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    /// Major component.
    pub major: u64,
    /// Minor component, bumped for releases.
    pub minor: u64,
    /// Patch component, bumped for hotfixes.
    pub patch: u64,
}

impl Version {
    /// The zero version, used to seed scans over epic names.
    pub const ZERO: Self = Self {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the first version embedded in free text, e.g. an epic named
    /// `"Release v2.4.1"`. Returns `None` when the text contains no
    /// `major.minor.patch` triple; callers scanning epic lists skip such
    /// names rather than fail. A digit run that overflows `u64` is treated
    /// the same way: the name is skipped, not an error.
    #[must_use]
    pub fn extract(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        // The regex only admits digit runs, so the component parses can
        // fail solely on overflow past u64.
        let part = |i| caps.get(i).and_then(|m| m.as_str().parse().ok());
        Some(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
        })
    }

    /// Return the greater of `self` and `other`.
    ///
    /// When the two are equal, `self` is returned; equal versions are
    /// interchangeable, so callers must not rely on which one comes back.
    #[must_use]
    pub fn newest(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// The next release version: minor incremented, patch reset to zero.
    #[must_use]
    pub const fn bump_minor(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
            patch: 0,
        }
    }

    /// The next hotfix version: patch incremented.
    #[must_use]
    pub const fn bump_patch(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor,
            patch: self.patch + 1,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = TrackerError;

    /// Parse a string that is required to contain a version. Call sites that
    /// merely scan names should prefer [`Version::extract`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::extract(s).ok_or_else(|| TrackerError::VersionParse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_epic_name() {
        let version = Version::extract("Release v2.4.1");
        assert_eq!(version, Some(Version::new(2, 4, 1)));
    }

    #[test]
    fn test_extract_takes_first_match() {
        let version = Version::extract("1.2.3 then 4.5.6");
        assert_eq!(version, Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_extract_missing_version() {
        assert_eq!(Version::extract("unrelated epic"), None);
        assert_eq!(Version::extract("v1.2"), None);
        assert_eq!(Version::extract(""), None);
    }

    #[test]
    fn test_extract_skips_overflowing_components() {
        // 21 digits, past u64::MAX; the name is skipped like any other
        // unparseable one.
        assert_eq!(Version::extract("Release v999999999999999999999.0.0"), None);
        assert_eq!(
            Version::extract("Release v1.2.999999999999999999999"),
            None
        );
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 3, 0) > Version::new(1, 2, 9));
        assert!(Version::new(1, 2, 4) > Version::new(1, 2, 3));
        assert_eq!(Version::new(1, 2, 3), Version::new(1, 2, 3));
    }

    #[test]
    fn test_newest_picks_greater() {
        let older = Version::new(1, 2, 3);
        let newer = Version::new(1, 3, 0);
        assert_eq!(older.newest(newer), newer);
        assert_eq!(newer.newest(older), newer);
    }

    #[test]
    fn test_newest_equal_versions_interchangeable() {
        let a = Version::new(1, 2, 3);
        let b = Version::new(1, 2, 3);
        assert_eq!(a.newest(b), b.newest(a));
    }

    #[test]
    fn test_bump_minor_resets_patch() {
        assert_eq!(Version::new(2, 4, 1).bump_minor(), Version::new(2, 5, 0));
        assert_eq!(Version::ZERO.bump_minor(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(Version::new(2, 4, 1).bump_patch(), Version::new(2, 4, 2));
        assert_eq!(Version::ZERO.bump_patch(), Version::new(0, 0, 1));
    }

    #[test]
    fn test_display_round_trip() {
        let version = Version::new(12, 0, 7);
        assert_eq!(version.to_string(), "12.0.7");
        assert_eq!("12.0.7".parse::<Version>().ok(), Some(version));
    }

    #[test]
    fn test_from_str_requires_version() {
        assert!("no version here".parse::<Version>().is_err());
    }
}
