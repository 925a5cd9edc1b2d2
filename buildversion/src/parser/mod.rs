//! Build definition parsers.
//!
//! A build definition parser knows one build system's descriptor file and
//! how to pull the application version out of it. Parsers are collected in a
//! [`ParserRegistry`] and selected by name (from configuration or the command
//! line) or by detecting which descriptor a project directory contains.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use buildversion::parser::ParserRegistry;
//!
//! let registry = ParserRegistry::with_defaults();
//! let parser = registry.resolve(Some("maven"), Path::new(".")).unwrap();
//! let version = parser.extract_app_version(Path::new(".")).unwrap();
//! println!("{}", version);
//! ```

mod error;
mod pom;
mod registry;

use std::path::Path;

use crate::version::AppVersion;

pub use error::{BuildFileFormatError, ParseError, ParseResult};
pub use pom::{extract_version, PomParser, POM_FILE};
pub use registry::ParserRegistry;

/// A parser that extracts the application version from a build descriptor.
pub trait BuildDefinitionParser: Send + Sync {
    /// Stable registry key (e.g. `"maven"`).
    fn name(&self) -> &'static str;

    /// Human-readable name for listings.
    fn display_name(&self) -> &'static str;

    /// Descriptor file name this parser reads, relative to the project directory.
    fn build_file(&self) -> &'static str;

    /// Extract the application version from the project in `dir`.
    ///
    /// Either returns exactly one version or fails; there is no default value.
    fn extract_app_version(&self, dir: &Path) -> ParseResult<AppVersion>;

    /// Check whether `dir` contains this parser's descriptor.
    fn detect(&self, dir: &Path) -> bool {
        dir.join(self.build_file()).is_file()
    }
}
