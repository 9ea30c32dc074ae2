//! The canonical table produced by the schema normalizer.

use polars::prelude::*;

use parts_model::CanonicalField;

use crate::clean::is_placeholder;
use crate::error::Result;
use crate::header::{ColumnResolution, Resolution};
use crate::polars_utils::{any_to_f64, any_to_i64, any_to_string_non_empty};

/// Cleaned listing data keyed by canonical column names.
///
/// `price` and `weight` are nullable `Float64`, `quantity` is a non-null
/// `Int64`, and every other column is a non-null `String`. Passthrough and
/// duplicate columns are kept for debugging but carry no canonical field.
#[derive(Debug, Clone)]
pub struct CanonicalTable {
    frame: DataFrame,
    resolutions: Vec<ColumnResolution>,
}

impl CanonicalTable {
    pub(crate) fn new(frame: DataFrame, resolutions: Vec<ColumnResolution>) -> Self {
        Self { frame, resolutions }
    }

    /// Wraps an existing frame, treating columns whose names are canonical
    /// field names as canonical and everything else as passthrough.
    pub fn from_frame(frame: DataFrame) -> Self {
        let resolutions = frame
            .get_column_names()
            .into_iter()
            .map(|name| {
                let column = name.to_string();
                let resolution = column
                    .parse::<CanonicalField>()
                    .map_or(Resolution::Passthrough, Resolution::Canonical);
                ColumnResolution {
                    source: column.clone(),
                    column,
                    resolution,
                }
            })
            .collect();
        Self { frame, resolutions }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn resolutions(&self) -> &[ColumnResolution] {
        &self.resolutions
    }

    pub fn column_names(&self) -> Vec<String> {
        self.resolutions.iter().map(|r| r.column.clone()).collect()
    }

    pub fn has_field(&self, field: CanonicalField) -> bool {
        self.resolutions.iter().any(|r| r.field() == Some(field))
    }

    /// Canonical fields present, in column order.
    pub fn mapped_fields(&self) -> Vec<CanonicalField> {
        self.resolutions
            .iter()
            .filter_map(ColumnResolution::field)
            .collect()
    }

    /// Columns that carry no canonical field.
    pub fn unmapped_columns(&self) -> Vec<&str> {
        self.resolutions
            .iter()
            .filter(|r| r.field().is_none())
            .map(|r| r.column.as_str())
            .collect()
    }

    fn cell(&self, column: &str, row: usize) -> Option<AnyValue<'_>> {
        self.frame.column(column).ok()?.get(row).ok()
    }

    /// Non-blank text of a cell, whatever the column dtype.
    ///
    /// Blank cells, nulls and placeholder tokens read as `None`.
    pub fn text(&self, column: &str, row: usize) -> Option<String> {
        let value = any_to_string_non_empty(self.cell(column, row)?)?;
        let trimmed = value.trim();
        if is_placeholder(trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Numeric value of a cell; text cells are parsed.
    pub fn number(&self, column: &str, row: usize) -> Option<f64> {
        any_to_f64(self.cell(column, row)?).filter(|value| value.is_finite())
    }

    /// Integer value of a cell; text cells are parsed.
    pub fn integer(&self, column: &str, row: usize) -> Option<i64> {
        any_to_i64(self.cell(column, row)?)
    }

    pub fn field_text(&self, field: CanonicalField, row: usize) -> Option<String> {
        self.text(field.as_str(), row)
    }

    pub fn field_number(&self, field: CanonicalField, row: usize) -> Option<f64> {
        self.number(field.as_str(), row)
    }

    pub fn field_integer(&self, field: CanonicalField, row: usize) -> Option<i64> {
        self.integer(field.as_str(), row)
    }

    /// Serializes the cleaned table as comma-delimited text with a header row.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut frame = self.frame.clone();
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut frame)?;
        Ok(buffer)
    }
}
