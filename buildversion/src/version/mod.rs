//! Application version model.
//!
//! [`AppVersion`] is the structured value every build definition parser
//! produces. It is comparable (for "did the version change?" checks between
//! builds) and can be incremented.
//!
//! # Ordering
//!
//! ```text
//! 1.0.0-SNAPSHOT < 1.0.0 < 1.0.1 < 1.1.0 < 2.0.0
//! 1.0.0-alpha.2  < 1.0.0-alpha.10 < 1.0.0-beta
//! ```
//!
//! A version carrying a qualifier ranks below the same version without one.
//! Build metadata only breaks ties.

mod parse;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use parse::{parse_version, VersionParseError};

/// Version component selector for [`AppVersion::bump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionComponent {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionComponent::Major => write!(f, "major"),
            VersionComponent::Minor => write!(f, "minor"),
            VersionComponent::Patch => write!(f, "patch"),
        }
    }
}

/// Structured application version.
///
/// # Example
///
/// ```
/// use buildversion::version::{AppVersion, VersionComponent};
///
/// let version = AppVersion::parse("1.4-SNAPSHOT").unwrap();
/// assert!(version.is_snapshot());
/// assert_eq!(version.to_string(), "1.4.0-SNAPSHOT");
///
/// let next = version.bump(VersionComponent::Minor);
/// assert_eq!(next.to_string(), "1.5.0");
/// assert!(next > version);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppVersion {
    /// Major version number.
    pub major: u64,

    /// Minor version number.
    pub minor: u64,

    /// Patch version number (0 when the source omitted it).
    pub patch: u64,

    /// Qualifier following `-` (e.g. `SNAPSHOT`, `beta-1`, `rc.2`).
    pub qualifier: Option<String>,

    /// Build metadata following `+`.
    pub build: Option<String>,
}

impl AppVersion {
    /// Create a release version with no qualifier or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
            build: None,
        }
    }

    /// Parse a version string.
    ///
    /// See [`parse_version`] for the accepted forms.
    pub fn parse(text: &str) -> Result<Self, VersionParseError> {
        parse_version(text)
    }

    /// Set the qualifier.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Set the build metadata.
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Check if this is a Maven snapshot version.
    pub fn is_snapshot(&self) -> bool {
        self.qualifier
            .as_deref()
            .is_some_and(|q| q.eq_ignore_ascii_case("SNAPSHOT"))
    }

    /// Check if this version has neither qualifier nor build metadata.
    pub fn is_release(&self) -> bool {
        self.qualifier.is_none() && self.build.is_none()
    }

    /// The same version with qualifier and build metadata removed.
    pub fn release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Increment one component.
    ///
    /// Lower components reset to zero; qualifier and build metadata are
    /// dropped. Increments saturate at `u64::MAX`.
    pub fn bump(&self, component: VersionComponent) -> Self {
        match component {
            VersionComponent::Major => Self::new(self.major.saturating_add(1), 0, 0),
            VersionComponent::Minor => Self::new(self.major, self.minor.saturating_add(1), 0),
            VersionComponent::Patch => {
                Self::new(self.major, self.minor, self.patch.saturating_add(1))
            }
        }
    }

    /// Convert to a [`semver::Version`].
    ///
    /// Fails when the qualifier or build metadata is not valid semver
    /// (e.g. a numeric qualifier identifier with a leading zero).
    pub fn to_semver(&self) -> Result<semver::Version, semver::Error> {
        let mut version = semver::Version::new(self.major, self.minor, self.patch);
        if let Some(qualifier) = &self.qualifier {
            version.pre = semver::Prerelease::new(qualifier)?;
        }
        if let Some(build) = &self.build {
            version.build = semver::BuildMetadata::new(build)?;
        }
        Ok(version)
    }
}

impl From<semver::Version> for AppVersion {
    fn from(version: semver::Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            qualifier: (!version.pre.is_empty()).then(|| version.pre.to_string()),
            build: (!version.build.is_empty()).then(|| version.build.to_string()),
        }
    }
}

impl FromStr for AppVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl Ord for AppVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_qualifiers(self.qualifier.as_deref(), other.qualifier.as_deref()))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for AppVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare qualifiers; no qualifier ranks above any qualifier.
fn compare_qualifiers(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let mut left = a.split('.');
            let mut right = b.split('.');
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(l), Some(r)) => match compare_identifiers(l, r) {
                        Ordering::Equal => continue,
                        ordering => return ordering,
                    },
                }
            }
        }
    }
}

/// Numeric identifiers compare numerically and rank below alphanumeric ones.
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match (numeric(a), numeric(b)) {
        (true, true) => {
            let trimmed_a = a.trim_start_matches('0');
            let trimmed_b = b.trim_start_matches('0');
            trimmed_a
                .len()
                .cmp(&trimmed_b.len())
                .then_with(|| trimmed_a.cmp(trimmed_b))
                // `01` and `1` are numerically equal but not Eq
                .then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl Serialize for AppVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AppVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_version(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> AppVersion {
        AppVersion::parse(text).unwrap()
    }

    #[test]
    fn test_new_is_release() {
        let version = AppVersion::new(1, 2, 3);
        assert!(version.is_release());
        assert!(!version.is_snapshot());
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_display_normalizes_missing_patch() {
        assert_eq!(v("1.0-SNAPSHOT").to_string(), "1.0.0-SNAPSHOT");
        assert_eq!(v("2.1").to_string(), "2.1.0");
        assert_eq!(v("1.2.3-rc.1+exp.sha.5114f85").to_string(), "1.2.3-rc.1+exp.sha.5114f85");
    }

    #[test]
    fn test_snapshot_detection_is_case_insensitive() {
        assert!(v("1.0.0-SNAPSHOT").is_snapshot());
        assert!(v("1.0.0-snapshot").is_snapshot());
        assert!(!v("1.0.0-SNAPSHOT.1").is_snapshot());
        assert!(!v("1.0.0").is_snapshot());
    }

    #[test]
    fn test_ordering_release_chain() {
        let chain = ["1.0.0-SNAPSHOT", "1.0.0", "1.0.1", "1.1.0", "2.0.0"];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_ordering_qualifiers() {
        assert!(v("1.0.0-alpha.2") < v("1.0.0-alpha.10"));
        assert!(v("1.0.0-alpha.10") < v("1.0.0-beta"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-1") < v("1.0.0-alpha"));
    }

    #[test]
    fn test_ordering_numeric_not_lexical() {
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("10.0.0") > v("9.99.99"));
    }

    #[test]
    fn test_missing_patch_equals_zero_patch() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1.0").cmp(&v("1.0.0")), Ordering::Equal);
    }

    #[test]
    fn test_build_metadata_breaks_ties() {
        assert!(v("1.0.0") < v("1.0.0+1"));
        assert!(v("1.0.0+a") < v("1.0.0+b"));
        assert_ne!(v("1.0.0+a"), v("1.0.0"));
    }

    #[test]
    fn test_bump() {
        let version = v("1.4.7-SNAPSHOT+42");
        assert_eq!(version.bump(VersionComponent::Major), AppVersion::new(2, 0, 0));
        assert_eq!(version.bump(VersionComponent::Minor), AppVersion::new(1, 5, 0));
        assert_eq!(version.bump(VersionComponent::Patch), AppVersion::new(1, 4, 8));
    }

    #[test]
    fn test_bump_saturates() {
        let version = AppVersion::new(u64::MAX, 0, 0);
        assert_eq!(version.bump(VersionComponent::Major).major, u64::MAX);
    }

    #[test]
    fn test_release_strips_qualifier_and_build() {
        let version = v("3.2.1-beta-1+build.9");
        assert_eq!(version.release(), AppVersion::new(3, 2, 1));
        assert!(!version.is_release());
    }

    #[test]
    fn test_builders() {
        let version = AppVersion::new(1, 0, 0)
            .with_qualifier("rc.1")
            .with_build("7");
        assert_eq!(version.to_string(), "1.0.0-rc.1+7");
    }

    #[test]
    fn test_semver_interop() {
        let version = v("1.2.3-beta.1+build.5");
        let semver = version.to_semver().unwrap();
        assert_eq!(semver, semver::Version::parse("1.2.3-beta.1+build.5").unwrap());
        assert_eq!(AppVersion::from(semver), version);
    }

    #[test]
    fn test_semver_rejects_leading_zero_qualifier() {
        assert!(v("1.0.0-01").to_semver().is_err());
    }

    #[test]
    fn test_from_str() {
        let version: AppVersion = "0.9.1".parse().unwrap();
        assert_eq!(version, AppVersion::new(0, 9, 1));
        assert!("garbage".parse::<AppVersion>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let version = v("1.0-SNAPSHOT");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.0.0-SNAPSHOT\"");

        let back: AppVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);

        assert!(serde_json::from_str::<AppVersion>("\"nope\"").is_err());
    }

    #[test]
    fn test_component_display() {
        assert_eq!(VersionComponent::Major.to_string(), "major");
        assert_eq!(VersionComponent::Patch.to_string(), "patch");
    }
}
