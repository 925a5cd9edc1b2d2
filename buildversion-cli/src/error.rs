//! CLI error type.

use buildversion::config::ConfigError;
use buildversion::logging::LoggingError;
use buildversion::{ParseError, VersionParseError};
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Version extraction or parser selection failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A version given on the command line is malformed.
    #[error("invalid version: {0}")]
    Version(#[from] VersionParseError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_display() {
        let err: CliError = VersionParseError::Empty.into();
        assert_eq!(err.to_string(), "invalid version: version string is empty");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: CliError = ParseError::UnknownParser("ant".to_string()).into();
        assert_eq!(err.to_string(), "unknown build definition parser 'ant'");
    }

    #[test]
    fn test_io_error_becomes_output() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, CliError::Output(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
