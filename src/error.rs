//! Error types for dataset conversion

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conversion errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Set the source option!")]
    MissingSource,

    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("{}:{line}:{column}: '{token}' is not a number", .path.display())]
    NumberFormat {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: expected {expected} values per row, found {found}")]
    RowWidth {
        line: usize,
        expected: u64,
        found: usize,
    },

    #[error("{len} bytes is not a whole number of 8-byte values")]
    TruncatedValue { len: usize },

    #[error("{len} bytes is too short for the 8-byte counts header")]
    TruncatedHeader { len: usize },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// `map_err` adapter; the path is only copied once an error occurs.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
