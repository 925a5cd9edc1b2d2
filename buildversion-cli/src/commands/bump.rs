//! Bump command - print the next version for a project.
//!
//! Only prints; the build descriptor is never modified.

use std::io::Write;
use std::path::PathBuf;

use buildversion::VersionComponent;

use super::common::{extract_with, ComponentArg, OutputFormat};
use super::extract::{write_version, ExtractReport};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the bump command.
pub struct BumpArgs {
    pub component: ComponentArg,
    pub dir: PathBuf,
    pub parser: Option<String>,
    pub format: OutputFormat,
}

/// Run the bump command.
pub fn run(runner: &CliRunner, args: BumpArgs, out: &mut impl Write) -> Result<(), CliError> {
    let (parser, current) = extract_with(runner, args.parser, &args.dir)?;
    let next = current.bump(VersionComponent::from(args.component));

    tracing::info!(from = %current, to = %next, "Computed next version");
    write_version(&ExtractReport::new(parser, &next), args.format, out)
}
