//! Compare command - order two version strings.

use std::cmp::Ordering;
use std::io::Write;

use buildversion::AppVersion;

use crate::error::CliError;

/// Run the compare command, printing `<`, `=`, or `>`.
pub fn run(left: &str, right: &str, out: &mut impl Write) -> Result<(), CliError> {
    let left = AppVersion::parse(left)?;
    let right = AppVersion::parse(right)?;

    let symbol = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    writeln!(out, "{}", symbol)?;
    Ok(())
}
