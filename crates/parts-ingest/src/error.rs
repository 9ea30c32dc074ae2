//! Error types for listing ingestion.

use thiserror::Error;

/// Errors raised when input cannot be read as delimited text.
///
/// Cell-level coercion problems are never reported here; unparsable prices,
/// quantities and weights degrade to their documented defaults instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {source}")]
    InvalidEncoding {
        #[source]
        source: std::str::Utf8Error,
    },

    /// Input starts with a byte-order mark for an encoding we do not read.
    #[error("unsupported text encoding: {encoding}")]
    UnsupportedEncoding { encoding: &'static str },

    /// Input is empty or its first row has no column names.
    #[error("input has no header row")]
    MissingHeader,

    /// A data row has more fields than the header.
    #[error("expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The delimited-text reader rejected the input.
    #[error("malformed delimited text at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// Failed to assemble the canonical table.
    #[error("failed to build table: {message}")]
    Table { message: String },
}

impl From<polars::prelude::PolarsError> for ParseError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Table {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::Csv {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, ParseError>;
