//! buildversion CLI - Command-line interface
//!
//! This binary provides a command-line interface to the buildversion library.

mod commands;
mod error;
mod runner;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use buildversion::config::config_file_path;
use clap::{ArgAction, Parser, Subcommand};

use commands::bump::BumpArgs;
use commands::common::{ComponentArg, OutputFormat};
use commands::config::ConfigCommands;
use commands::extract::ExtractArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Debug, Parser)]
#[command(name = "buildversion")]
#[command(version, about = "Read application versions from build descriptors", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the version declared by a project's build descriptor
    Extract {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Parser to use instead of auto-detection (see `parsers`)
        #[arg(long)]
        parser: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the project's version incremented at one component
    Bump {
        /// Component to increment
        #[arg(value_enum)]
        component: ComponentArg,

        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Parser to use instead of auto-detection (see `parsers`)
        #[arg(long)]
        parser: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare two version strings, printing <, = or >
    Compare {
        /// Left-hand version
        left: String,

        /// Right-hand version
        right: String,
    },

    /// List available build definition parsers
    Parsers,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Locating the config file must not depend on it loading.
    if let Commands::Config {
        command: ConfigCommands::Path,
    } = cli.command
    {
        let path = cli.config.unwrap_or_else(config_file_path);
        commands::config::run_path(&path, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let runner = CliRunner::new(cli.config, cli.verbose)?;

    let result = match cli.command {
        Commands::Extract {
            dir,
            parser,
            format,
        } => commands::extract::run(
            &runner,
            ExtractArgs {
                dir,
                parser,
                format,
            },
            &mut out,
        ),
        Commands::Bump {
            component,
            dir,
            parser,
            format,
        } => commands::bump::run(
            &runner,
            BumpArgs {
                component,
                dir,
                parser,
                format,
            },
            &mut out,
        ),
        Commands::Compare { left, right } => commands::compare::run(&left, &right, &mut out),
        Commands::Parsers => commands::parsers::run(runner.registry(), &mut out),
        Commands::Config { command } => commands::config::run(&runner, command, &mut out),
    };
    result?;

    out.flush()?;
    Ok(())
}
