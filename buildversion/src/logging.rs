//! Logging setup.
//!
//! The library only emits `tracing` events; binaries call [`init_logging`]
//! once to print them on stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Build a filter from a directive such as `info` or `buildversion=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Pick the filter: `env_directive` (the `RUST_LOG` value) when set and
/// non-blank, otherwise `default_level`.
///
/// A set but invalid `env_directive` is an error, not a fallback.
pub fn select_filter(
    env_directive: Option<&str>,
    default_level: &str,
) -> Result<EnvFilter, LoggingError> {
    match env_directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => build_filter(directive),
        None => build_filter(default_level),
    }
}

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
pub fn init_logging(default_level: &str) -> Result<(), LoggingError> {
    let env_directive = std::env::var_os(EnvFilter::DEFAULT_ENV);
    let env_directive = env_directive.as_ref().map(|d| d.to_string_lossy());
    let filter = select_filter(env_directive.as_deref(), default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_build_filter_accepts_levels() {
        for directive in ["trace", "debug", "info", "warn", "error", "buildversion=debug"] {
            assert!(build_filter(directive).is_ok(), "{}", directive);
        }
    }

    #[test]
    fn test_build_filter_rejects_bad_level() {
        let err = build_filter("buildversion=loud").unwrap_err();
        assert!(err.to_string().contains("buildversion=loud"));
    }

    #[test]
    fn test_select_filter_prefers_env_directive() {
        let filter = select_filter(Some("debug"), "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = select_filter(None, "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_select_filter_blank_env_uses_default() {
        let filter = select_filter(Some("  "), "error").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_select_filter_invalid_env_is_error() {
        let err = select_filter(Some("buildversion=loud"), "warn").unwrap_err();
        assert!(matches!(
            err,
            LoggingError::InvalidFilter { ref directive, .. } if directive == "buildversion=loud"
        ));
    }
}
