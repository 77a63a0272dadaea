use std::collections::HashMap;
use std::mem;
use std::str::Lines;

use log::{debug, trace, warn};

use crate::Document;
use crate::error::ParseError;
use crate::section::Section;
use crate::util::trim;

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    lines: Lines<'a>,
    /// Name of the open section; empty before the first header or after `[]`.
    current: String,
    seen_header: bool,
    entries: HashMap<String, String>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            current: String::new(),
            seen_header: false,
            entries: HashMap::new(),
        }
    }
}

impl Parser<'_> {
    /// Parse every line, committing finished sections into `document` as they close.
    ///
    /// On error, sections committed before the offending line stay in `document`; the section
    /// that was open at that point is dropped.
    pub(crate) fn parse_into(mut self, document: &mut Document) -> Result<(), ParseError> {
        while let Some(line) = self.lines.next() {
            if line.is_empty() || line.starts_with([';', '#']) {
                trace!("skipping blank or comment line");
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = parse_section_name(line, rest)?;
                trace!("section header: {name}");
                self.begin_section(name, document);
            } else {
                let (key, value) = parse_section_entry(line)?;
                trace!("entry: {key} = {value}");
                self.entries.insert(key.to_owned(), value.to_owned());
            }
        }

        // The last section is only closed by the end of input.
        self.commit(document);

        Ok(())
    }

    fn begin_section(&mut self, name: &str, document: &mut Document) {
        if !self.current.is_empty() {
            self.commit(document);
        } else if !self.seen_header {
            self.discard_orphans();
        } else if !self.entries.is_empty() {
            debug!(
                "carrying {} key-value pair(s) from an unnamed section into [{name}]",
                self.entries.len()
            );
        }

        self.seen_header = true;
        name.clone_into(&mut self.current);
    }

    /// Move the accumulated entries into `document` under the open section's name, leaving an
    /// empty accumulator behind. Without a named section open, the entries are discarded.
    fn commit(&mut self, document: &mut Document) {
        if self.current.is_empty() {
            self.discard_orphans();
            return;
        }

        let name = mem::take(&mut self.current);
        let entries = mem::take(&mut self.entries);
        debug!("committing section [{name}] with {} key(s)", entries.len());
        document.commit(Section::new(name, entries));
    }

    /// Key-value pairs that never reach a named section.
    fn discard_orphans(&mut self) {
        if !self.entries.is_empty() {
            warn!(
                "discarding {} key-value pair(s) outside of any named section",
                self.entries.len()
            );
            self.entries.clear();
        }
    }
}

/// The name is everything between the opening `[` and the first `]`, untrimmed. Anything after
/// the `]` is ignored.
fn parse_section_name<'a>(line: &str, rest: &'a str) -> Result<&'a str, ParseError> {
    rest.find(']')
        .map(|end| &rest[..end])
        .ok_or_else(|| ParseError::Syntax {
            line: line.to_owned(),
        })
}

/// Split on the first `=` or `:`, whichever comes first.
fn parse_section_entry(line: &str) -> Result<(&str, &str), ParseError> {
    let separator = line.find(['=', ':']).ok_or_else(|| ParseError::Syntax {
        line: line.to_owned(),
    })?;

    Ok((trim(&line[..separator]), trim(&line[separator + 1..])))
}
