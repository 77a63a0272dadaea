use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line that is neither blank, a comment, a section header, nor a key-value pair.
    #[error("Invalid syntax: {line}")]
    Syntax { line: String },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to open {}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
