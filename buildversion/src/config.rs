//! Configuration file handling.
//!
//! Settings live in an INI file, by default
//! `~/.config/buildversion/config.ini`:
//!
//! ```ini
//! [parser]
//! ; Registry name of the parser to use; empty means auto-detect
//! name = maven
//!
//! [logging]
//! ; Log filter used when RUST_LOG is not set
//! level = warn
//! ```
//!
//! A missing file is not an error; defaults apply. Unknown keys are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::logging::build_filter;

/// Configuration file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const PARSER_SECTION: &str = "parser";
const LOGGING_SECTION: &str = "logging";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Failed to write the configuration file.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The file is not valid INI.
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// A setting has an unusable value.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Directory holding the configuration file.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("buildversion")
}

/// Default configuration file path.
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// `[parser]` settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserSettings {
    /// Parser registry name; `None` selects by detection.
    pub name: Option<String>,
}

/// `[logging]` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `buildversion=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub parser: ParserSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`, returning defaults when the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content, path)
    }

    /// Parse INI content; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::default();

        if let Some(section) = ini.section(Some(PARSER_SECTION)) {
            config.parser.name = section
                .get("name")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }

        if let Some(level) = ini
            .section(Some(LOGGING_SECTION))
            .and_then(|s| s.get("level"))
            .map(str::trim)
            .filter(|level| !level.is_empty())
        {
            config.set_log_level(level)?;
        }

        Ok(config)
    }

    /// Set the log filter, validating it first.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        build_filter(level).map_err(|e| ConfigError::InvalidValue {
            key: format!("{}.level", LOGGING_SECTION),
            value: level.to_string(),
            reason: e.to_string(),
        })?;
        self.logging.level = level.to_string();
        Ok(())
    }

    /// Render as INI.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(PARSER_SECTION))
            .set("name", self.parser.name.clone().unwrap_or_default());
        ini.with_section(Some(LOGGING_SECTION))
            .set("level", self.logging.level.clone());
        ini
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.to_ini()
            .write_to_file(path)
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.parser.name, None);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_parse_values() {
        let content = "[parser]\nname = maven\n\n[logging]\nlevel = buildversion=debug\n";
        let config = ConfigFile::parse(content, Path::new("config.ini")).unwrap();
        assert_eq!(config.parser.name.as_deref(), Some("maven"));
        assert_eq!(config.logging.level, "buildversion=debug");
    }

    #[test]
    fn test_empty_name_means_detect() {
        let config = ConfigFile::parse("[parser]\nname =\n", Path::new("c.ini")).unwrap();
        assert_eq!(config.parser.name, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let content = "[parser]\nflavour = vanilla\n[other]\nx = 1\n";
        let config = ConfigFile::parse(content, Path::new("c.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = ConfigFile::parse("[logging]\nlevel = app=extreme\n", Path::new("c.ini"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "logging.level"));
    }

    #[test]
    fn test_invalid_ini_rejected() {
        let err = ConfigFile::parse("[parser", Path::new("bad.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.ini"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = ConfigFile::default();
        config.parser.name = Some("maven".to_string());
        config.set_log_level("info").unwrap();
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_path_name() {
        let path = config_file_path();
        assert!(path.ends_with("buildversion/config.ini"));
    }
}
