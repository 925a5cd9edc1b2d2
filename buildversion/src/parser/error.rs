//! Error types for build definition parsers.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::version::VersionParseError;

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A build descriptor is missing, unreadable, malformed, or has no version.
///
/// The message always names the offending file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BuildFileFormatError {
    /// Descriptor file the error refers to.
    pub path: PathBuf,

    /// Human-readable description.
    pub message: String,
}

impl BuildFileFormatError {
    /// Create an error with a custom message.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The file could not be read.
    pub fn unreadable(path: &Path, source: &io::Error) -> Self {
        Self::new(path, format!("unable to read {}: {}", path.display(), source))
    }

    /// The file is not a well-formed descriptor document.
    pub fn invalid_document(path: &Path, detail: impl AsRef<str>) -> Self {
        Self::new(
            path,
            format!("{} is not a valid POM file: {}", path.display(), detail.as_ref()),
        )
    }

    /// The document holds no usable version value.
    pub fn missing_version(path: &Path) -> Self {
        Self::new(
            path,
            format!("No version information found in {}", path.display()),
        )
    }
}

/// Errors surfaced by build definition parsers and the parser registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The build descriptor could not be used.
    #[error(transparent)]
    BuildFileFormat(#[from] BuildFileFormatError),

    /// The extracted version text is not a valid version.
    #[error(transparent)]
    Version(#[from] VersionParseError),

    /// No parser is registered under the requested name.
    #[error("unknown build definition parser '{0}'")]
    UnknownParser(String),

    /// No registered parser recognises the directory.
    #[error("no supported build descriptor found in {}", .0.display())]
    NoParserDetected(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_version_message() {
        let err = BuildFileFormatError::missing_version(Path::new("/work/pom.xml"));
        assert_eq!(err.to_string(), "No version information found in /work/pom.xml");
        assert_eq!(err.path, PathBuf::from("/work/pom.xml"));
    }

    #[test]
    fn test_invalid_document_message() {
        let err = BuildFileFormatError::invalid_document(Path::new("pom.xml"), "unclosed element");
        assert_eq!(err.to_string(), "pom.xml is not a valid POM file: unclosed element");
    }

    #[test]
    fn test_unreadable_message() {
        let source = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = BuildFileFormatError::unreadable(Path::new("a/pom.xml"), &source);
        assert!(err.to_string().starts_with("unable to read a/pom.xml"));
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn test_version_error_is_transparent() {
        let inner = VersionParseError::InvalidPattern("x".to_string());
        let err: ParseError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, ParseError::Version(inner));
    }

    #[test]
    fn test_registry_error_display() {
        assert_eq!(
            ParseError::UnknownParser("gradle".to_string()).to_string(),
            "unknown build definition parser 'gradle'"
        );
        assert_eq!(
            ParseError::NoParserDetected(PathBuf::from("/src")).to_string(),
            "no supported build descriptor found in /src"
        );
    }
}
