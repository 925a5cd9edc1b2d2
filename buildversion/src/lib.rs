//! buildversion - Application version extraction from build descriptors
//!
//! This library reads the application version declared in a project's build
//! descriptor (currently Maven's `pom.xml`) so CI jobs can compare or
//! increment versions between builds.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use buildversion::extract_version;
//!
//! let version = extract_version(Path::new("path/to/project")).unwrap();
//! println!("{}.{}.{}", version.major, version.minor, version.patch);
//! ```

pub mod config;
pub mod logging;
pub mod parser;
pub mod version;

pub use parser::{
    extract_version, BuildDefinitionParser, BuildFileFormatError, ParseError, ParseResult,
    ParserRegistry, PomParser,
};
pub use version::{AppVersion, VersionComponent, VersionParseError};
