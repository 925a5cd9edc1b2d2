//! Extract command - print the version declared by a project's build descriptor.

use std::io::Write;
use std::path::PathBuf;

use buildversion::{AppVersion, BuildDefinitionParser};
use serde::Serialize;

use super::common::{extract_with, OutputFormat};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the extract command.
pub struct ExtractArgs {
    pub dir: PathBuf,
    pub parser: Option<String>,
    pub format: OutputFormat,
}

/// JSON shape of an extraction result.
#[derive(Debug, Serialize)]
pub struct ExtractReport<'a> {
    pub parser: &'a str,
    pub build_file: &'a str,
    pub version: &'a AppVersion,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub qualifier: Option<&'a str>,
    pub snapshot: bool,
}

impl<'a> ExtractReport<'a> {
    pub fn new(parser: &'a dyn BuildDefinitionParser, version: &'a AppVersion) -> Self {
        Self {
            parser: parser.name(),
            build_file: parser.build_file(),
            version,
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            qualifier: version.qualifier.as_deref(),
            snapshot: version.is_snapshot(),
        }
    }
}

/// Run the extract command.
pub fn run(runner: &CliRunner, args: ExtractArgs, out: &mut impl Write) -> Result<(), CliError> {
    let (parser, version) = extract_with(runner, args.parser, &args.dir)?;
    write_version(&ExtractReport::new(parser, &version), args.format, out)
}

/// Write a report in the requested format.
pub fn write_version(
    report: &ExtractReport<'_>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.version)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
