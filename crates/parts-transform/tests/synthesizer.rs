//! End-to-end synthesis from listing text to upload rows.

use parts_ingest::parse_str;
use parts_model::{Condition, ProductIdType, TargetColumn};
use parts_transform::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, OutputTable, normalize_condition, transform,
    truncate_with_ellipsis,
};
use proptest::prelude::*;

fn convert(csv: &str) -> OutputTable {
    let table = parse_str(csv).expect("parse listing");
    transform(&table).expect("synthesize")
}

#[test]
fn bosch_listing_end_to_end() {
    let output = convert(
        "Part Number,Brand,Price,Quantity,Condition\n\
         AB-100,Bosch,$45.00,3,Remanufactured\n",
    );
    let row = &output.rows()[0];
    assert_eq!(row.product_id, "AB-100");
    assert_eq!(row.product_id_type, ProductIdType::Sku);
    assert_eq!(row.brand_name, "Bosch");
    assert_eq!(row.manufacturer, "Bosch");
    assert!((row.standard_price - 45.0).abs() < f64::EPSILON);
    assert!((row.list_price - 54.0).abs() < f64::EPSILON);
    assert_eq!(row.quantity, 3);
    assert_eq!(row.condition_type, Condition::Refurbished);
    assert_eq!(row.item_name, "Bosch - AB-100");
    assert_eq!(
        row.product_description,
        "Brand: Bosch. Part Number: AB-100"
    );
    assert_eq!(row.product_tax_code, "A_GEN_TAX");
    assert_eq!(row.fulfillment_channel, "DEFAULT");
}

#[test]
fn every_field_populated_without_optional_sources() {
    let output = convert("Warehouse Bin\nA1\nB2\n");
    assert_eq!(output.height(), 2);
    assert!(!output.has_fitment());

    for column in output.frame().get_columns() {
        assert_eq!(column.null_count(), 0, "{} has nulls", column.name());
    }

    let row = &output.rows()[1];
    assert_eq!(row.product_id, "AUTO-PART-000001");
    assert_eq!(row.product_id_type, ProductIdType::Sku);
    assert_eq!(row.item_name, DEFAULT_TITLE);
    assert_eq!(row.brand_name, "Generic");
    assert_eq!(row.product_description, DEFAULT_DESCRIPTION);
    assert_eq!(row.item_type, "AutoPart");
    assert_eq!(row.quantity, 0);
    assert!(row.standard_price.abs() < f64::EPSILON);
    assert!(row.list_price.abs() < f64::EPSILON);
    assert_eq!(row.condition_type, Condition::New);
    assert_eq!(row.part_number, "");
    for column in TargetColumn::BASE {
        assert!(row.cell(column).is_some(), "{column} missing");
    }
}

#[test]
fn long_title_is_capped() {
    let title = "Heavy duty ceramic brake pad ".repeat(10);
    let csv = format!("Title\n{title}\n");
    let output = convert(&csv);
    let row = &output.rows()[0];
    assert_eq!(row.item_name.chars().count(), 200);
    assert!(row.item_name.ends_with("..."));
    assert!(row.product_description.chars().count() <= 2000);
}

#[test]
fn long_description_is_capped() {
    let title = "Ceramic brake pad set".repeat(5);
    let notes = "Fits front axle ".repeat(130);
    let csv = format!("Description,Notes\n{title},{notes}\n");
    let output = convert(&csv);
    let description = &output.rows()[0].product_description;
    assert_eq!(description.chars().count(), 2000);
    assert!(description.ends_with("..."));
    assert!(description.starts_with(&format!("{title}. Fits front axle")));
}

#[test]
fn condition_vocabulary() {
    assert_eq!(normalize_condition("Remanufactured"), Condition::Refurbished);
    assert_eq!(normalize_condition("unknown-value"), Condition::New);
    assert_eq!(normalize_condition(""), Condition::New);
    assert_eq!(normalize_condition(" PRE-OWNED "), Condition::Used);
}

#[test]
fn upc_takes_precedence() {
    let output = convert("Part Number,UPC\nAB-100,012345678905\nCD-200,\n");
    let rows = output.rows();
    assert_eq!(rows[0].product_id, "012345678905");
    assert_eq!(rows[0].product_id_type, ProductIdType::Upc);
    assert_eq!(rows[0].part_number, "AB-100");
    assert_eq!(rows[1].product_id, "CD-200");
    assert_eq!(rows[1].product_id_type, ProductIdType::Sku);
}

#[test]
fn list_price_markup() {
    let output = convert("Part Number,Price\nAB-100,19.99\n");
    assert!((output.rows()[0].list_price - 23.99).abs() < f64::EPSILON);
}

#[test]
fn fitment_columns_follow_schema() {
    let without = convert("Part Number\nAB-100\n");
    assert_eq!(without.headers().len(), 18);
    assert!(without.rows()[0].fitment.is_none());

    let with_make = convert("Part Number,Make\nAB-100,Honda\n");
    let headers = with_make.headers();
    assert_eq!(headers.len(), 21);
    assert_eq!(
        &headers[18..],
        &["fitment-year", "fitment-make", "fitment-model"]
    );
    let fitment = with_make.rows()[0].fitment.clone().expect("fitment");
    assert_eq!(fitment.make, "Honda");
    assert_eq!(fitment.year, "");
    assert_eq!(fitment.model, "");
}

#[test]
fn description_lists_fitment() {
    let output = convert(
        "Description,Category,Year,Make,Model,Notes\n\
         Brake pad set,Brakes,2015,Honda,Civic,Includes hardware\n",
    );
    let row = &output.rows()[0];
    assert_eq!(
        row.product_description,
        "Brake pad set. Category: Brakes. Fits: 2015 Honda Civic. Includes hardware"
    );
    assert_eq!(row.item_type, "Brakes");
    let fitment = row.fitment.clone().expect("fitment");
    assert_eq!(fitment.year, "2015");
}

#[test]
fn dimensions_rendered_as_text() {
    let output = convert("Part Number,Weight,Length\nAB-100,2.50 lbs,12\n");
    let row = &output.rows()[0];
    assert_eq!(row.item_weight, "2.5");
    assert_eq!(row.item_length, "12");
    assert_eq!(row.item_width, "");
}

#[test]
fn csv_output_header_is_exact() {
    let output = convert("Part Number,Price\nAB-100,19.99\n");
    let text = String::from_utf8(output.to_csv_bytes().unwrap()).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(
            "product-id,product-id-type,item-name,brand-name,manufacturer,\
             product-description,item-type,standard-price,quantity,\
             product-tax-code,condition-type,part-number,item-weight,\
             item-length,item-width,item-height,list-price,fulfillment-channel"
        )
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn write_csv_creates_file() {
    let output = convert("Part Number\nAB-100\n");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload.csv");
    output.write_csv(&path).unwrap();
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, output.to_csv_bytes().unwrap());
}

proptest! {
    #[test]
    fn truncation_respects_cap(text in "\\PC{0,300}", cap in 3usize..250) {
        let cut = truncate_with_ellipsis(&text, cap);
        let length = text.chars().count();
        if length <= cap {
            prop_assert_eq!(cut, text);
        } else {
            prop_assert_eq!(cut.chars().count(), cap);
            prop_assert!(cut.ends_with("..."));
        }
    }
}
