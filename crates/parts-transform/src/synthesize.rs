//! Row synthesis: canonical fields to upload fields.
//!
//! Every output field is resolved independently per row from an ordered list
//! of source columns. The first non-blank source wins; when all are blank the
//! field takes its documented default, so synthesis never fails on missing
//! data.

use tracing::{debug, info};

use parts_ingest::CanonicalTable;
use parts_model::{
    CanonicalField, Condition, Fitment, ProductIdType, SynthesisOptions, TargetRow,
};

use crate::error::Result;
use crate::output::OutputTable;
use crate::pricing::list_price;
use crate::text::{DescriptionParts, TitleParts, build_description, build_title};

/// Brand used when neither brand nor manufacturer is present.
pub const DEFAULT_BRAND: &str = "Generic";
/// Item type used when neither category nor type is present.
pub const DEFAULT_ITEM_TYPE: &str = "AutoPart";

/// Secondary source columns consulted after the canonical field.
const SKU_COLUMN: &str = "sku";
const MANUFACTURER_COLUMN: &str = "manufacturer";
const TYPE_COLUMN: &str = "type";

/// Maps a free-text condition onto the condition vocabulary.
pub fn normalize_condition(raw: &str) -> Condition {
    Condition::normalize(raw)
}

/// Identifier for a row without a part number or UPC.
pub fn placeholder_id(prefix: &str, row: usize) -> String {
    format!("{prefix}{row:06}")
}

/// Whether the table carries any fitment field.
pub fn has_fitment(table: &CanonicalTable) -> bool {
    CanonicalField::FITMENT
        .into_iter()
        .any(|field| table.has_field(field))
}

fn first_text(table: &CanonicalTable, columns: &[&str], row: usize) -> Option<String> {
    columns.iter().find_map(|column| table.text(column, row))
}

/// Builds one upload row from row `row` of the canonical table.
pub fn synthesize_row(
    table: &CanonicalTable,
    row: usize,
    options: &SynthesisOptions,
) -> TargetRow {
    synthesize(table, row, options, has_fitment(table)).row
}

/// A synthesized row and whether its identifier was generated.
struct Synthesized {
    row: TargetRow,
    placeholder: bool,
}

fn synthesize(
    table: &CanonicalTable,
    row: usize,
    options: &SynthesisOptions,
    with_fitment: bool,
) -> Synthesized {
    let text = |field: CanonicalField| table.field_text(field, row);

    let part_number = first_text(table, &[CanonicalField::PartNumber.as_str(), SKU_COLUMN], row);
    let upc = text(CanonicalField::Upc);
    let placeholder = upc.is_none() && part_number.is_none();
    let (product_id, product_id_type) = match upc {
        Some(upc) => (upc, ProductIdType::Upc),
        None => (
            part_number
                .clone()
                .unwrap_or_else(|| placeholder_id(&options.placeholder_prefix, row)),
            ProductIdType::Sku,
        ),
    };

    let brand = first_text(
        table,
        &[CanonicalField::Brand.as_str(), MANUFACTURER_COLUMN],
        row,
    )
    .unwrap_or_else(|| DEFAULT_BRAND.to_string());

    let item_name = build_title(
        &TitleParts {
            brand: text(CanonicalField::Brand),
            part_number: text(CanonicalField::PartNumber),
            title: text(CanonicalField::Title),
        },
        options.title_max_chars,
    );
    let product_description = build_description(
        &DescriptionParts {
            title: text(CanonicalField::Title),
            brand: text(CanonicalField::Brand),
            part_number: text(CanonicalField::PartNumber),
            category: text(CanonicalField::Category),
            year: text(CanonicalField::Year),
            make: text(CanonicalField::Make),
            model: text(CanonicalField::Model),
            notes: text(CanonicalField::Notes),
        },
        options.description_max_chars,
    );

    let item_type = first_text(
        table,
        &[CanonicalField::Category.as_str(), TYPE_COLUMN],
        row,
    )
    .unwrap_or_else(|| DEFAULT_ITEM_TYPE.to_string());

    let standard_price = table
        .field_number(CanonicalField::Price, row)
        .unwrap_or(0.0);
    let quantity = table
        .field_integer(CanonicalField::Quantity, row)
        .unwrap_or(0);
    let condition_type = text(CanonicalField::Condition)
        .map_or(Condition::New, |raw| normalize_condition(&raw));

    let fitment = with_fitment.then(|| Fitment {
        year: text(CanonicalField::Year).unwrap_or_default(),
        make: text(CanonicalField::Make).unwrap_or_default(),
        model: text(CanonicalField::Model).unwrap_or_default(),
    });

    let target = TargetRow {
        product_id,
        product_id_type,
        item_name,
        manufacturer: brand.clone(),
        brand_name: brand,
        product_description,
        item_type,
        standard_price,
        quantity,
        product_tax_code: options.tax_code.clone(),
        condition_type,
        part_number: part_number.unwrap_or_default(),
        item_weight: text(CanonicalField::Weight).unwrap_or_default(),
        item_length: text(CanonicalField::Length).unwrap_or_default(),
        item_width: text(CanonicalField::Width).unwrap_or_default(),
        item_height: text(CanonicalField::Height).unwrap_or_default(),
        list_price: list_price(standard_price, options.list_price_markup),
        fulfillment_channel: options.fulfillment_channel.clone(),
        fitment,
    };
    Synthesized {
        row: target,
        placeholder,
    }
}

/// Synthesizes the upload table with the default constants.
pub fn transform(table: &CanonicalTable) -> Result<OutputTable> {
    transform_with_options(table, &SynthesisOptions::default())
}

/// Synthesizes one upload row per canonical row, in input order.
pub fn transform_with_options(
    table: &CanonicalTable,
    options: &SynthesisOptions,
) -> Result<OutputTable> {
    let with_fitment = has_fitment(table);
    let mut placeholders = 0usize;
    let rows: Vec<TargetRow> = (0..table.height())
        .map(|row| {
            let synthesized = synthesize(table, row, options, with_fitment);
            placeholders += usize::from(synthesized.placeholder);
            synthesized.row
        })
        .collect();

    let by_upc = rows
        .iter()
        .filter(|r| r.product_id_type == ProductIdType::Upc)
        .count();
    debug!(
        placeholders,
        by_upc,
        with_fitment,
        "resolved product identifiers"
    );

    let output = OutputTable::from_rows(rows, with_fitment)?;
    info!(rows = output.height(), "synthesized upload rows");
    Ok(output)
}
