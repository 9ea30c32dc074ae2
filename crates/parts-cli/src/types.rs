use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one `convert` run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    /// Data rows kept after blank-row removal.
    pub rows_processed: usize,
    pub rows_output: usize,
    pub blank_rows_dropped: usize,
    pub mapped_fields: Vec<String>,
    pub unmapped_columns: Vec<String>,
    pub has_fitment: bool,
    pub output_path: Option<PathBuf>,
    pub canonical_path: Option<PathBuf>,
    pub dry_run: bool,
}
