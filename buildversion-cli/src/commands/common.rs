//! Common types and utilities shared across CLI commands.

use std::path::Path;

use buildversion::config::ConfigFile;
use buildversion::{AppVersion, BuildDefinitionParser, VersionComponent};
use clap::ValueEnum;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain version string
    #[default]
    Text,
    /// JSON object with the version components
    Json,
}

/// Version component selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ComponentArg {
    /// Increment the major version, resetting minor and patch
    Major,
    /// Increment the minor version, resetting patch
    Minor,
    /// Increment the patch version
    Patch,
}

impl From<ComponentArg> for VersionComponent {
    fn from(component: ComponentArg) -> Self {
        match component {
            ComponentArg::Major => VersionComponent::Major,
            ComponentArg::Minor => VersionComponent::Minor,
            ComponentArg::Patch => VersionComponent::Patch,
        }
    }
}

/// Resolve the parser name from CLI args and config.
///
/// CLI takes precedence, then config; `None` means auto-detect.
pub fn resolve_parser_name(cli_parser: Option<String>, config: &ConfigFile) -> Option<String> {
    cli_parser.or_else(|| config.parser.name.clone())
}

/// Select a parser for `dir` and extract its version.
pub fn extract_with<'a>(
    runner: &'a CliRunner,
    cli_parser: Option<String>,
    dir: &Path,
) -> Result<(&'a dyn BuildDefinitionParser, AppVersion), CliError> {
    let name = resolve_parser_name(cli_parser, runner.config());
    let parser = runner.registry().resolve(name.as_deref(), dir)?;
    let version = parser.extract_app_version(dir)?;
    Ok((parser, version))
}
