#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod parser;
mod section;
mod util;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

pub use error::{ParseError, ReadError};
use parser::Parser;
pub use section::Section;

/// Every section committed so far, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: HashMap<String, Section>,
}

impl Document {
    /// Parse INI text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] for the first line that is neither blank, a comment, a
    /// section header, nor a key-value pair.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut document = Self::default();
        Parser::new(text).parse_into(&mut document)?;
        Ok(document)
    }

    /// Unlike [`IniReader::get`], a missing key and an empty value are told apart here.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Sections in unspecified order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Insert `section`, replacing any section of the same name.
    pub(crate) fn commit(&mut self, section: Section) {
        self.sections.insert(section.name().to_owned(), section);
    }
}

/// Reads INI files into a [`Document`] that persists across reads.
///
/// Failures are reported through a boolean plus a message kept until the next failing read;
/// [`IniReader::try_read`] is the `Result` flavor of the same operation.
#[derive(Debug, Default)]
pub struct IniReader {
    document: Document,
    last_error: String,
}

impl IniReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path`, merging its sections into the document. Returns `false` on failure, with
    /// the reason available from [`IniReader::get_last_error`].
    pub fn read(&mut self, path: impl AsRef<Path>) -> bool {
        match self.try_read(path) {
            Ok(()) => true,
            Err(e) => {
                debug!("read failed: {e}");
                self.last_error = e.to_string();
                false
            }
        }
    }

    /// Read `path`, merging its sections into the document.
    ///
    /// A section that appears in the file replaces any section of the same name from an earlier
    /// read. Sections committed before a syntax error are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Open`] or [`ReadError::Read`] if the file cannot be opened or read,
    /// and [`ReadError::Parse`] on the first malformed line.
    pub fn try_read(&mut self, path: impl AsRef<Path>) -> Result<(), ReadError> {
        let text = read_text(path.as_ref())?;
        Parser::new(&text).parse_into(&mut self.document)?;
        Ok(())
    }

    /// Value of `key` in `section`, or an empty string if either is absent.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> String {
        self.document
            .get(section, key)
            .unwrap_or_default()
            .to_owned()
    }

    /// Message of the most recent failing read. Successful reads do not clear it.
    #[must_use]
    pub fn get_last_error(&self) -> &str {
        &self.last_error
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Read `path` into a fresh [`Document`].
///
/// # Errors
///
/// See [`IniReader::try_read`].
pub fn load(path: impl AsRef<Path>) -> Result<Document, ReadError> {
    let text = read_text(path.as_ref())?;
    Ok(Document::parse(&text)?)
}

fn read_text(path: &Path) -> Result<String, ReadError> {
    let mut file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_owned(),
        source,
    })?;
    debug!("opened {}", path.display());

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|source| ReadError::Read {
            path: path.to_owned(),
            source,
        })?;

    Ok(util::decode_data(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_without_sections() {
        let document = Document::parse("; comment\n\n# another\n")
            .expect("failed to parse hardcoded INI file");

        assert!(document.is_empty());
        assert_eq!(document.get("", ""), None);
    }

    #[test]
    fn multiple_sections() {
        let document = Document::parse(
            "
[Version]
Signature = $CHICAGO$

[Section]
key = value
",
        )
        .expect("failed to parse hardcoded INI file");

        assert_eq!(document.len(), 2);
        assert_eq!(document.get("Version", "Signature"), Some("$CHICAGO$"));
        assert_eq!(document.get("Section", "key"), Some("value"));

        let mut names = document.sections().map(Section::name).collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, ["Section", "Version"]);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let document = Document::parse("[S]\nk=1\nk=2\n").expect("failed to parse");

        assert_eq!(document.get("S", "k"), Some("2"));
        assert_eq!(document.section("S").map(Section::len), Some(1));
    }

    #[test]
    fn reader_get_flattens_missing_and_empty() {
        let reader = IniReader {
            document: Document::parse("[S]\nempty =\n").expect("failed to parse"),
            last_error: String::new(),
        };

        assert_eq!(reader.get("S", "empty"), "");
        assert_eq!(reader.get("S", "missing"), "");
        assert_eq!(reader.get("missing", "empty"), "");
    }

    #[test]
    fn syntax_error_message() {
        let error = ReadError::from(ParseError::Syntax {
            line: "no separator here".to_owned(),
        });

        assert_eq!(error.to_string(), "Invalid syntax: no separator here");
    }
}
