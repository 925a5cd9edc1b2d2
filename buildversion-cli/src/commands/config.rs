//! Configuration CLI commands.
//!
//! Provides `config path` and `config show` for inspecting the settings the
//! other commands run with.

use std::io::Write;
use std::path::Path;

use clap::Subcommand;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration settings
    Show,
}

/// Run a config subcommand.
pub fn run(
    runner: &CliRunner,
    command: ConfigCommands,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(runner.config_path(), out),
        ConfigCommands::Show => run_show(runner, out),
    }
}

/// Print the configuration file path.
///
/// Takes the path rather than a runner so it works when the file itself
/// fails to load.
pub fn run_path(config_path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", config_path.display())?;
    Ok(())
}

/// Print the effective settings.
fn run_show(runner: &CliRunner, out: &mut impl Write) -> Result<(), CliError> {
    let config = runner.config();

    writeln!(out, "[parser]")?;
    match &config.parser.name {
        Some(name) => writeln!(out, "  name = {}", name)?,
        None => writeln!(out, "  name = (auto-detect)")?,
    }
    writeln!(out)?;
    writeln!(out, "[logging]")?;
    writeln!(out, "  level = {}", config.logging.level)?;

    Ok(())
}
