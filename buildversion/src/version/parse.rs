//! Version string parsing.
//!
//! Accepts the version forms found in build descriptors:
//! `MAJOR.MINOR[.PATCH][-QUALIFIER][+BUILD]`
//!
//! Examples:
//! - `1.2.3`
//! - `1.0-SNAPSHOT` (Maven style, patch defaults to 0)
//! - `2.4.1-beta.2+build.77`

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::AppVersion;

/// Error parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// Input was empty or whitespace only
    #[error("version string is empty")]
    Empty,
    /// Input doesn't match the version pattern
    #[error("'{0}' is not a valid version string")]
    InvalidPattern(String),
    /// A numeric component doesn't fit in 64 bits
    #[error("invalid {component} version component: {value}")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },
}

/// Get the version regex pattern.
///
/// We capture:
/// - Group 1: major (ASCII digits)
/// - Group 2: minor (ASCII digits)
/// - Group 3: patch (ASCII digits, optional)
/// - Group 4: qualifier (dot-separated identifiers, optional)
/// - Group 5: build metadata (dot-separated identifiers, optional)
///
/// `\d` is Unicode-aware in `regex`, so the digit classes are spelled out.
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
        )
        .unwrap()
    })
}

/// Parse a numeric component; an absent group counts as zero.
fn parse_component(
    component: &'static str,
    value: Option<regex::Match<'_>>,
) -> Result<u64, VersionParseError> {
    let Some(value) = value else {
        return Ok(0);
    };

    value
        .as_str()
        .parse::<u64>()
        .map_err(|_| VersionParseError::InvalidComponent {
            component,
            value: value.as_str().to_string(),
        })
}

/// Parse a version string into an [`AppVersion`].
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use buildversion::version::parse_version;
///
/// let version = parse_version("1.0-SNAPSHOT").unwrap();
/// assert_eq!((version.major, version.minor, version.patch), (1, 0, 0));
/// assert_eq!(version.qualifier.as_deref(), Some("SNAPSHOT"));
///
/// assert!(parse_version("not-a-version").is_err());
/// ```
pub fn parse_version(text: &str) -> Result<AppVersion, VersionParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(VersionParseError::Empty);
    }

    let captures = version_pattern()
        .captures(text)
        .ok_or_else(|| VersionParseError::InvalidPattern(text.to_string()))?;

    // Patch is optional: Maven versions like `1.0-SNAPSHOT` omit it.
    Ok(AppVersion {
        major: parse_component("major", captures.get(1))?,
        minor: parse_component("minor", captures.get(2))?,
        patch: parse_component("patch", captures.get(3))?,
        qualifier: captures.get(4).map(|m| m.as_str().to_string()),
        build: captures.get(5).map(|m| m.as_str().to_string()),
    })
}
