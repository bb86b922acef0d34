//! Error types for the abiprobe-core library.
//!
//! Dumping a registry can only fail on the output sink. Everything else in
//! here belongs to reading and checking reference listings.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for abiprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all abiprobe operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to write rendered constants to the output sink
    #[error("failed to write constant output: {0}")]
    Output(#[source] std::io::Error),

    /// Failed to read a reference listing
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A listing line is not of the form `NAME;VALUE`
    #[error("malformed listing line {line}: '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// A listing names the same constant twice
    #[error("duplicate constant '{name}' on line {line}")]
    DuplicateName {
        /// 1-based line number of the second occurrence
        line: usize,
        /// The repeated name
        name: String,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new malformed line error
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            content: content.into(),
        }
    }

    /// Creates a new duplicate name error
    pub fn duplicate_name(line: usize, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            line,
            name: name.into(),
        }
    }

    /// Returns true if the error comes from the content of a listing
    /// rather than from I/O
    pub fn is_listing_error(&self) -> bool {
        matches!(self, Self::MalformedLine { .. } | Self::DuplicateName { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err)
    }
}
