//! Maven POM version extraction.
//!
//! Reads `pom.xml` from a project directory and returns the text of the
//! first `/project/version` element as an [`AppVersion`]:
//!
//! ```xml
//! <project>
//!     <groupId>com.example</groupId>
//!     <version>1.2.3</version>
//! </project>
//! ```
//!
//! Only direct children of the `<project>` root are inspected, so a
//! `<version>` nested under `<parent>` or `<dependency>` is never picked up.
//! Element names are matched literally; namespace prefixes and property
//! placeholders such as `${revision}` are not resolved.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

use super::error::{BuildFileFormatError, ParseResult};
use super::BuildDefinitionParser;
use crate::version::AppVersion;

/// Maven build descriptor file name.
pub const POM_FILE: &str = "pom.xml";

const PROJECT_ELEMENT: &[u8] = b"project";
const VERSION_ELEMENT: &[u8] = b"version";

/// Build definition parser for Maven projects.
///
/// Stateless; one instance may serve any number of concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PomParser;

impl PomParser {
    /// Create a new POM parser.
    pub fn new() -> Self {
        Self
    }

    /// Path of the POM inside a project directory.
    pub fn pom_path(dir: &Path) -> PathBuf {
        dir.join(POM_FILE)
    }

    /// Read and query the POM, returning the trimmed version text.
    fn read_version_text(&self, pom: &Path) -> Result<String, BuildFileFormatError> {
        debug!(path = %pom.display(), "Reading build descriptor");

        let bytes = fs::read(pom).map_err(|e| BuildFileFormatError::unreadable(pom, &e))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| BuildFileFormatError::invalid_document(pom, "content is not valid UTF-8"))?;

        let text = find_project_version(&content)
            .map_err(|detail| BuildFileFormatError::invalid_document(pom, detail))?;

        match text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(BuildFileFormatError::missing_version(pom)),
        }
    }
}

impl BuildDefinitionParser for PomParser {
    fn name(&self) -> &'static str {
        "maven"
    }

    fn display_name(&self) -> &'static str {
        "Maven project object model (pom.xml)"
    }

    fn build_file(&self) -> &'static str {
        POM_FILE
    }

    fn extract_app_version(&self, dir: &Path) -> ParseResult<AppVersion> {
        let pom = Self::pom_path(dir);

        let text = self.read_version_text(&pom).inspect_err(|e| {
            warn!(path = %pom.display(), error = %e, "Rejected build descriptor");
        })?;
        debug!(path = %pom.display(), version = %text, "Extracted version text");

        Ok(AppVersion::parse(&text)?)
    }
}

/// Extract the application version from the `pom.xml` in `dir`.
///
/// Shorthand for [`PomParser::extract_app_version`].
pub fn extract_version(dir: &Path) -> ParseResult<AppVersion> {
    PomParser::new().extract_app_version(dir)
}

/// Find the raw text of the first `/project/version` element.
///
/// Returns `Ok(None)` when the document is well formed but has no such
/// element, and `Err(detail)` when the document is not well formed.
fn find_project_version(xml: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    // Names of the currently open elements, root first.
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;
    let mut version: Option<String> = None;
    let mut capturing = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("{} at position {}", e, reader.buffer_position()))?;

        match event {
            Event::Start(e) => {
                if open.is_empty() {
                    if seen_root {
                        return Err("document has more than one root element".to_string());
                    }
                    seen_root = true;
                }
                let name = e.name().as_ref().to_vec();
                if version.is_none() && is_project_child(&open) && name == VERSION_ELEMENT {
                    version = Some(String::new());
                    capturing = true;
                }
                open.push(name);
            }
            Event::Empty(e) => {
                if open.is_empty() {
                    if seen_root {
                        return Err("document has more than one root element".to_string());
                    }
                    seen_root = true;
                }
                if version.is_none()
                    && is_project_child(&open)
                    && e.name().as_ref() == VERSION_ELEMENT
                {
                    version = Some(String::new());
                }
            }
            Event::End(e) => {
                let Some(name) = open.pop() else {
                    return Err("unexpected closing tag".to_string());
                };
                if name != e.name().as_ref() {
                    return Err(format!(
                        "closing tag </{}> does not match <{}>",
                        String::from_utf8_lossy(e.name().as_ref()),
                        String::from_utf8_lossy(&name)
                    ));
                }
                if capturing && open.len() == 1 {
                    capturing = false;
                }
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| e.to_string())?;
                if open.is_empty() && !text.trim().is_empty() {
                    return Err("text content outside the root element".to_string());
                }
                if capturing {
                    if let Some(version) = version.as_mut() {
                        version.push_str(&text);
                    }
                }
            }
            Event::CData(e) => {
                if open.is_empty() {
                    return Err("CDATA section outside the root element".to_string());
                }
                if capturing {
                    if let Some(version) = version.as_mut() {
                        version.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
            }
            Event::Eof => {
                if let Some(name) = open.last() {
                    return Err(format!(
                        "element <{}> is never closed",
                        String::from_utf8_lossy(name)
                    ));
                }
                if !seen_root {
                    return Err("document has no root element".to_string());
                }
                break;
            }
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    Ok(version)
}

/// True when the open element stack is exactly `<project>`.
fn is_project_child(open: &[Vec<u8>]) -> bool {
    open.len() == 1 && open[0] == PROJECT_ELEMENT
}
