//! Integration tests for the schema normalizer.

use parts_ingest::{CanonicalTable, ParseError, Resolution, parse, parse_str};
use parts_model::CanonicalField;

const LISTING: &str = "\
Part Number,SKU, Brand ,Unit Price,Qty,Weight,Description,Warehouse Bin,Condition
AB-100,SKU-1,Bosch,$45.00,3,2.5 lbs,Brake pad set,A1,Remanufactured
,,,,,,,,
CD-200,SKU-2,nan,\"$1,299.99\",,4lb,None,B7,used
EF-300,SKU-3,ACDelco,call,2.0,,Oil filter,,
";

fn mapping_report(table: &CanonicalTable) -> String {
    table
        .resolutions()
        .iter()
        .map(|r| format!("{} -> {} ({:?})", r.source, r.column, r.resolution))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn mapping_report_snapshot() {
    let table = parse_str(LISTING).unwrap();
    insta::assert_snapshot!(mapping_report(&table), @r"
    Part Number -> part_number (Canonical(PartNumber))
    SKU -> SKU_original (Duplicate(PartNumber))
    Brand -> brand (Canonical(Brand))
    Unit Price -> price (Canonical(Price))
    Qty -> quantity (Canonical(Quantity))
    Weight -> weight (Canonical(Weight))
    Description -> title (Canonical(Title))
    Warehouse Bin -> warehouse bin (Passthrough)
    Condition -> condition (Canonical(Condition))
    ");
}

#[test]
fn collision_keeps_both_values() {
    let table = parse_str(LISTING).unwrap();

    assert_eq!(table.height(), 3);
    assert_eq!(table.field_text(CanonicalField::PartNumber, 0).as_deref(), Some("AB-100"));
    assert_eq!(table.text("SKU_original", 0).as_deref(), Some("SKU-1"));
    assert_eq!(table.unmapped_columns(), vec!["SKU_original", "warehouse bin"]);
}

#[test]
fn cells_are_cleaned_per_field() {
    let table = parse_str(LISTING).unwrap();

    assert_eq!(table.field_number(CanonicalField::Price, 0), Some(45.0));
    assert_eq!(table.field_number(CanonicalField::Price, 1), Some(1299.99));
    assert_eq!(table.field_number(CanonicalField::Price, 2), None);

    assert_eq!(table.field_integer(CanonicalField::Quantity, 0), Some(3));
    assert_eq!(table.field_integer(CanonicalField::Quantity, 1), Some(0));
    assert_eq!(table.field_integer(CanonicalField::Quantity, 2), Some(2));

    assert_eq!(table.field_number(CanonicalField::Weight, 0), Some(2.5));
    assert_eq!(table.field_number(CanonicalField::Weight, 1), Some(4.0));
    assert_eq!(table.field_number(CanonicalField::Weight, 2), None);

    // Placeholder tokens become blank text.
    let brand = table.frame().column("brand").unwrap().str().unwrap();
    assert_eq!(brand.get(1), Some(""));
    assert_eq!(table.field_text(CanonicalField::Title, 1), None);
    assert_eq!(table.field_text(CanonicalField::Condition, 1).as_deref(), Some("used"));
}

#[test]
fn header_mapping_ignores_case_and_whitespace() {
    let upper = parse_str("  PART NUMBER  ,UNIT PRICE\nA,1\n").unwrap();
    let lower = parse_str("part number,unit price\nA,1\n").unwrap();
    assert_eq!(upper.column_names(), lower.column_names());
    assert_eq!(upper.column_names(), vec!["part_number", "price"]);
}

#[test]
fn cleaning_is_idempotent() {
    let first = parse_str(LISTING).unwrap();
    let serialized = first.to_csv_bytes().unwrap();
    let second = parse(&serialized).unwrap();

    assert_eq!(first.height(), second.height());
    let first_columns = first.column_names();
    let second_columns = second.column_names();
    assert_eq!(first_columns.len(), second_columns.len());

    for (a, b) in first_columns.iter().zip(&second_columns) {
        for row in 0..first.height() {
            assert_eq!(first.text(a, row), second.text(b, row), "column {a} row {row}");
        }
    }
    for field in [CanonicalField::Price, CanonicalField::Weight] {
        for row in 0..first.height() {
            assert_eq!(first.field_number(field, row), second.field_number(field, row));
        }
    }
}

#[test]
fn from_frame_recognises_canonical_names() {
    let table = parse_str("sku,make\nA,Ford\n").unwrap();
    let rebuilt = CanonicalTable::from_frame(table.frame().clone());
    assert!(rebuilt.has_field(CanonicalField::PartNumber));
    assert!(rebuilt.has_field(CanonicalField::Make));
    assert_eq!(
        rebuilt.resolutions()[1].resolution,
        Resolution::Canonical(CanonicalField::Make)
    );
}

#[test]
fn malformed_input_is_a_parse_error() {
    let err = parse_str("sku,price\nA,1,extra\n").unwrap_err();
    assert!(matches!(err, ParseError::RaggedRow { .. }));

    let err = parse(vec![0xC3, 0x28]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidEncoding { .. }));
}
