//! Named collection of build definition parsers.

use std::fmt;
use std::path::Path;

use tracing::debug;

use super::error::{ParseError, ParseResult};
use super::pom::PomParser;
use super::BuildDefinitionParser;

/// Registry of build definition parsers, kept in registration order.
///
/// Detection walks the parsers in that order, so earlier registrations win
/// when a directory holds several descriptors.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn BuildDefinitionParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in parser.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PomParser::new());
        registry
    }

    /// Register a parser, replacing any parser with the same name.
    pub fn register(&mut self, parser: impl BuildDefinitionParser + 'static) {
        let name = parser.name();
        match self
            .parsers
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))
        {
            Some(index) => self.parsers[index] = Box::new(parser),
            None => self.parsers.push(Box::new(parser)),
        }
    }

    /// Look up a parser by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&dyn BuildDefinitionParser> {
        self.parsers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .map(|p| p.as_ref())
    }

    /// Registered parser names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Iterate over the registered parsers.
    pub fn iter(&self) -> impl Iterator<Item = &dyn BuildDefinitionParser> {
        self.parsers.iter().map(|p| p.as_ref())
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Find the first parser whose descriptor exists in `dir`.
    pub fn detect(&self, dir: &Path) -> Option<&dyn BuildDefinitionParser> {
        self.iter().find(|p| p.detect(dir))
    }

    /// Select a parser by explicit name, or by detection when `name` is `None`.
    pub fn resolve(
        &self,
        name: Option<&str>,
        dir: &Path,
    ) -> ParseResult<&dyn BuildDefinitionParser> {
        let parser = match name {
            Some(name) => self
                .get(name)
                .ok_or_else(|| ParseError::UnknownParser(name.to_string()))?,
            None => self
                .detect(dir)
                .ok_or_else(|| ParseError::NoParserDetected(dir.to_path_buf()))?,
        };

        debug!(parser = parser.name(), dir = %dir.display(), "Selected build definition parser");
        Ok(parser)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.names())
            .finish()
    }
}
