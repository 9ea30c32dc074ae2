//! The upload table.

use std::path::Path;

use polars::prelude::*;

use parts_model::{TargetColumn, TargetRow};

use crate::error::{Result, TransformError};

/// Synthesized upload rows and their Polars frame.
///
/// `standard-price` and `list-price` are `Float64`, `quantity` is `Int64`,
/// every other column is a non-null `String`. Fitment columns are present on
/// all rows or on none.
#[derive(Debug, Clone)]
pub struct OutputTable {
    frame: DataFrame,
    rows: Vec<TargetRow>,
    has_fitment: bool,
}

impl OutputTable {
    pub fn from_rows(rows: Vec<TargetRow>, has_fitment: bool) -> Result<Self> {
        let columns: Vec<Column> = TargetColumn::columns(has_fitment)
            .into_iter()
            .map(|column| build_column(column, &rows))
            .collect();
        let frame = DataFrame::new(columns)?;
        Ok(Self {
            frame,
            rows,
            has_fitment,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn rows(&self) -> &[TargetRow] {
        &self.rows
    }

    pub fn has_fitment(&self) -> bool {
        self.has_fitment
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<TargetColumn> {
        TargetColumn::columns(self.has_fitment)
    }

    /// Header row as written to the upload file.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns().into_iter().map(TargetColumn::header).collect()
    }

    /// Serializes the table as comma-delimited text with a header row.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut frame = self.frame.clone();
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut frame)?;
        Ok(buffer)
    }

    /// Writes the table to `path`.
    ///
    /// The file is only created once the whole table has been serialized.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let bytes = self.to_csv_bytes()?;
        std::fs::write(path, bytes).map_err(|source| TransformError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn build_column(column: TargetColumn, rows: &[TargetRow]) -> Column {
    let name: PlSmallStr = column.header().into();
    let series = match column {
        TargetColumn::StandardPrice => {
            let values: Vec<f64> = rows.iter().map(|row| row.standard_price).collect();
            Series::new(name, values)
        }
        TargetColumn::ListPrice => {
            let values: Vec<f64> = rows.iter().map(|row| row.list_price).collect();
            Series::new(name, values)
        }
        TargetColumn::Quantity => {
            let values: Vec<i64> = rows.iter().map(|row| row.quantity).collect();
            Series::new(name, values)
        }
        _ => {
            let values: Vec<String> = rows
                .iter()
                .map(|row| row.cell(column).unwrap_or_default())
                .collect();
            Series::new(name, values)
        }
    };
    series.into_column()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_model::{Condition, Fitment, ProductIdType};

    fn sample_row(fitment: Option<Fitment>) -> TargetRow {
        TargetRow {
            product_id: "AB-100".to_string(),
            product_id_type: ProductIdType::Sku,
            item_name: "Bosch - AB-100".to_string(),
            brand_name: "Bosch".to_string(),
            manufacturer: "Bosch".to_string(),
            product_description: "Brand: Bosch. Part Number: AB-100".to_string(),
            item_type: "AutoPart".to_string(),
            standard_price: 45.0,
            quantity: 3,
            product_tax_code: "A_GEN_TAX".to_string(),
            condition_type: Condition::Refurbished,
            part_number: "AB-100".to_string(),
            item_weight: String::new(),
            item_length: String::new(),
            item_width: String::new(),
            item_height: String::new(),
            list_price: 54.0,
            fulfillment_channel: "DEFAULT".to_string(),
            fitment,
        }
    }

    #[test]
    fn test_column_types() {
        let table = OutputTable::from_rows(vec![sample_row(None)], false).unwrap();
        let frame = table.frame();
        assert_eq!(frame.width(), 18);
        assert_eq!(
            frame.column("standard-price").unwrap().dtype(),
            &DataType::Float64
        );
        assert_eq!(frame.column("quantity").unwrap().dtype(), &DataType::Int64);
        assert_eq!(
            frame.column("condition-type").unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn test_header_line() {
        let fitment = Fitment {
            year: "2015".to_string(),
            ..Fitment::default()
        };
        let table = OutputTable::from_rows(vec![sample_row(Some(fitment))], true).unwrap();
        let bytes = table.to_csv_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, table.headers().join(","));
        assert!(header.ends_with("fitment-year,fitment-make,fitment-model"));
        assert!(text.contains("Refurbished"));
    }

    #[test]
    fn test_empty_table() {
        let table = OutputTable::from_rows(Vec::new(), false).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.frame().width(), 18);
    }
}
