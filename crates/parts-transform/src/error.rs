use std::path::PathBuf;

use thiserror::Error;

/// Internal failures while assembling or writing the output table.
///
/// Missing or unparsable source data never produces an error; every field
/// falls back to its default.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to build output table: {message}")]
    Table { message: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Table {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
