//! Canonical field vocabulary.
//!
//! Source listings arrive with arbitrary header spellings. Every header is
//! resolved against [`HEADER_VOCABULARY`], a static table of canonical fields
//! and the spellings accepted for each one. The table order is the tie-break
//! authority: the first field whose spelling list contains a header wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the fixed internal names that source headers are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Manufacturer part number or seller SKU.
    PartNumber,
    /// Free-text product title.
    Title,
    Brand,
    Price,
    Quantity,
    Category,
    /// Barcode-style identifier (UPC, EAN, GTIN).
    Upc,
    Weight,
    Length,
    Width,
    Height,
    /// Fitment model year.
    Year,
    /// Fitment vehicle make.
    Make,
    /// Fitment vehicle model.
    Model,
    Condition,
    Notes,
}

/// Canonical fields paired with their accepted header spellings (lower-case).
///
/// Iteration order is significant: a header listed under two fields resolves
/// to the earlier one.
pub const HEADER_VOCABULARY: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::PartNumber,
        &[
            "part number",
            "part_number",
            "partnumber",
            "sku",
            "item number",
            "item_number",
            "itemnumber",
            "part#",
            "item#",
            "product_id",
            "product id",
        ],
    ),
    (
        CanonicalField::Title,
        &[
            "description",
            "title",
            "product name",
            "product_name",
            "productname",
            "name",
            "item description",
            "item_description",
        ],
    ),
    (
        CanonicalField::Brand,
        &["brand", "manufacturer", "mfr", "vendor"],
    ),
    (
        CanonicalField::Price,
        &[
            "price",
            "unit price",
            "unit_price",
            "unitprice",
            "cost",
            "msrp",
            "retail_price",
        ],
    ),
    (
        CanonicalField::Quantity,
        &[
            "quantity",
            "qty",
            "stock",
            "inventory",
            "available",
            "on_hand",
            "on hand",
        ],
    ),
    (
        CanonicalField::Category,
        &[
            "category",
            "type",
            "product_type",
            "product type",
            "classification",
        ],
    ),
    (
        CanonicalField::Upc,
        &["upc", "barcode", "ean", "gtin", "upc_code", "upc code"],
    ),
    (
        CanonicalField::Weight,
        &[
            "weight",
            "item_weight",
            "item weight",
            "shipping_weight",
            "shipping weight",
        ],
    ),
    (
        CanonicalField::Length,
        &["length", "item_length", "item length"],
    ),
    (CanonicalField::Width, &["width", "item_width", "item width"]),
    (
        CanonicalField::Height,
        &["height", "item_height", "item height"],
    ),
    (
        CanonicalField::Year,
        &["year", "model_year", "model year", "vehicle_year"],
    ),
    (
        CanonicalField::Make,
        &[
            "make",
            "vehicle_make",
            "vehicle make",
            "car_make",
            "car make",
        ],
    ),
    (
        CanonicalField::Model,
        &[
            "model",
            "vehicle_model",
            "vehicle model",
            "car_model",
            "car model",
        ],
    ),
    (
        CanonicalField::Condition,
        &["condition", "item_condition", "item condition"],
    ),
    (
        CanonicalField::Notes,
        &[
            "notes",
            "comments",
            "description2",
            "additional_info",
            "additional info",
        ],
    ),
];

/// How a canonical column's cells are coerced during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Decimal number; unparsable values become missing.
    Decimal,
    /// Integer count; unparsable or missing values become zero.
    Count,
    /// Trimmed text with placeholder tokens blanked.
    Text,
}

impl CanonicalField {
    /// All canonical fields in vocabulary order.
    pub const ALL: [CanonicalField; 16] = [
        CanonicalField::PartNumber,
        CanonicalField::Title,
        CanonicalField::Brand,
        CanonicalField::Price,
        CanonicalField::Quantity,
        CanonicalField::Category,
        CanonicalField::Upc,
        CanonicalField::Weight,
        CanonicalField::Length,
        CanonicalField::Width,
        CanonicalField::Height,
        CanonicalField::Year,
        CanonicalField::Make,
        CanonicalField::Model,
        CanonicalField::Condition,
        CanonicalField::Notes,
    ];

    /// Vehicle fitment fields.
    pub const FITMENT: [CanonicalField; 3] = [
        CanonicalField::Year,
        CanonicalField::Make,
        CanonicalField::Model,
    ];

    /// Column name used in the canonical table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PartNumber => "part_number",
            Self::Title => "title",
            Self::Brand => "brand",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Category => "category",
            Self::Upc => "upc",
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
            Self::Year => "year",
            Self::Make => "make",
            Self::Model => "model",
            Self::Condition => "condition",
            Self::Notes => "notes",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Price | Self::Weight => FieldKind::Decimal,
            Self::Quantity => FieldKind::Count,
            _ => FieldKind::Text,
        }
    }

    /// Header spellings accepted for this field.
    pub fn accepted_headers(self) -> &'static [&'static str] {
        HEADER_VOCABULARY
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, spellings)| *spellings)
            .unwrap_or_default()
    }

    /// Resolves a source header to a canonical field.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for
    /// headers outside the vocabulary.
    pub fn from_header(header: &str) -> Option<Self> {
        let key = header.trim().to_lowercase();
        HEADER_VOCABULARY
            .iter()
            .find(|(_, spellings)| spellings.contains(&key.as_str()))
            .map(|(field, _)| *field)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    /// Parses a canonical column name (not a source header spelling).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
