//! Shared command setup: configuration, logging, and the parser registry.

use std::path::{Path, PathBuf};

use buildversion::config::{config_file_path, ConfigFile};
use buildversion::logging::init_logging;
use buildversion::ParserRegistry;
use tracing::debug;

use crate::error::CliError;

/// Context handed to every command.
pub struct CliRunner {
    config: ConfigFile,
    config_path: PathBuf,
    registry: ParserRegistry,
}

impl CliRunner {
    /// Load configuration from `config_path` (or the default path) and
    /// install logging.
    pub fn new(config_path: Option<PathBuf>, verbose: u8) -> Result<Self, CliError> {
        let runner = Self::without_logging(config_path)?;
        init_logging(&log_level(verbose, &runner.config))?;
        debug!(config = %runner.config_path.display(), "Configuration loaded");
        Ok(runner)
    }

    /// Load configuration without touching the global log subscriber.
    pub fn without_logging(config_path: Option<PathBuf>) -> Result<Self, CliError> {
        let (config, config_path) = match config_path {
            Some(path) => (ConfigFile::load_from(&path)?, path),
            None => (ConfigFile::load()?, config_file_path()),
        };

        Ok(Self {
            config,
            config_path,
            registry: ParserRegistry::with_defaults(),
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }
}

/// Log filter for the given `-v` count; without `-v` the config decides.
pub fn log_level(verbose: u8, config: &ConfigFile) -> String {
    match verbose {
        0 => config.logging.level.clone(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_level_from_verbosity() {
        let mut config = ConfigFile::default();
        config.logging.level = "error".to_string();

        assert_eq!(log_level(0, &config), "error");
        assert_eq!(log_level(1, &config), "info");
        assert_eq!(log_level(2, &config), "debug");
        assert_eq!(log_level(5, &config), "debug");
    }

    #[test]
    fn test_runner_loads_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[parser]\nname = maven\n").unwrap();

        let runner = CliRunner::without_logging(Some(path.clone())).unwrap();
        assert_eq!(runner.config().parser.name.as_deref(), Some("maven"));
        assert_eq!(runner.config_path(), path.as_path());
        assert_eq!(runner.registry().names(), vec!["maven"]);
    }

    #[test]
    fn test_runner_rejects_broken_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[logging]\nlevel = app=extreme\n").unwrap();

        let err = CliRunner::without_logging(Some(path)).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }
}
