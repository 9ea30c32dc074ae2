//! Schema normalizer: raw delimited text to a [`CanonicalTable`].

use polars::prelude::*;

use parts_model::CanonicalField;

use crate::clean::{clean_price, clean_quantity, clean_text, clean_weight, is_missing};
use crate::error::Result;
use crate::header::{ColumnResolution, Resolution, resolve_headers};
use crate::raw::{RawTable, read_raw_table};
use crate::table::CanonicalTable;

/// Parses raw bytes or text into a canonical table.
///
/// # Errors
///
/// Returns [`crate::ParseError`] when the input is not well-formed delimited
/// text. Unparsable cells never fail the parse.
pub fn parse(input: impl AsRef<[u8]>) -> Result<CanonicalTable> {
    parse_bytes(input.as_ref())
}

pub fn parse_str(input: &str) -> Result<CanonicalTable> {
    parse_bytes(input.as_bytes())
}

pub fn parse_bytes(input: &[u8]) -> Result<CanonicalTable> {
    let raw = read_raw_table(input)?;
    normalize(&raw)
}

/// Resolves headers, drops blank rows and cleans every column of a raw table.
pub fn normalize(raw: &RawTable) -> Result<CanonicalTable> {
    let resolutions = resolve_headers(&raw.headers);
    let rows: Vec<&Vec<String>> = raw
        .rows
        .iter()
        .filter(|row| !row.iter().all(|cell| is_missing(cell)))
        .collect();
    let dropped = raw.height() - rows.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped blank rows");
    }

    let mut columns = Vec::with_capacity(resolutions.len());
    for (idx, resolution) in resolutions.iter().enumerate() {
        let cells: Vec<&str> = rows
            .iter()
            .map(|row| row.get(idx).map_or("", String::as_str))
            .collect();
        columns.push(clean_column(resolution, &cells));
    }

    let frame = DataFrame::new(columns)?;
    tracing::info!(
        rows = frame.height(),
        columns = frame.width(),
        mapped = resolutions.iter().filter(|r| r.field().is_some()).count(),
        "normalized listing table"
    );
    Ok(CanonicalTable::new(frame, resolutions))
}

fn clean_column(resolution: &ColumnResolution, cells: &[&str]) -> Column {
    let name = resolution.column.as_str();
    match resolution.resolution {
        Resolution::Canonical(CanonicalField::Price) => {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| clean_price(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
        Resolution::Canonical(CanonicalField::Weight) => {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| clean_weight(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
        Resolution::Canonical(CanonicalField::Quantity) => {
            let values: Vec<i64> = cells.iter().map(|cell| clean_quantity(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
        Resolution::Canonical(_) | Resolution::Duplicate(_) | Resolution::Passthrough => {
            let values: Vec<String> = cells.iter().map(|cell| clean_text(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_rows_are_dropped() {
        let table = parse_str("sku,price\nA,1\n,\n  ,nan\nB,2\n").unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.field_text(CanonicalField::PartNumber, 1).as_deref(), Some("B"));
    }

    #[test]
    fn test_quantity_defaults_to_zero() {
        let table = parse_str("sku,qty\nA,\nB,lots\nC,7\n").unwrap();
        let qty = table.frame().column("quantity").unwrap().i64().unwrap();
        assert_eq!(qty.get(0), Some(0));
        assert_eq!(qty.get(1), Some(0));
        assert_eq!(qty.get(2), Some(7));
    }

    #[test]
    fn test_price_and_weight_become_null_when_unparsable() {
        let table = parse_str("sku,price,weight\nA,TBD,heavy\nB,$3.50,2 lbs\n").unwrap();
        assert_eq!(table.field_number(CanonicalField::Price, 0), None);
        assert_eq!(table.field_number(CanonicalField::Weight, 0), None);
        assert_eq!(table.field_number(CanonicalField::Price, 1), Some(3.5));
        assert_eq!(table.field_number(CanonicalField::Weight, 1), Some(2.0));
    }

    #[test]
    fn test_header_only_input() {
        let table = parse_str("Part Number,Price\n").unwrap();
        assert!(table.is_empty());
        assert!(table.has_field(CanonicalField::Price));
    }
}
