//! Parsers command - list the registered build definition parsers.

use std::io::Write;

use buildversion::ParserRegistry;

use crate::error::CliError;

/// Run the parsers command.
pub fn run(registry: &ParserRegistry, out: &mut impl Write) -> Result<(), CliError> {
    for parser in registry.iter() {
        writeln!(
            out,
            "{:<10} {:<12} {}",
            parser.name(),
            parser.build_file(),
            parser.display_name()
        )?;
    }
    Ok(())
}
