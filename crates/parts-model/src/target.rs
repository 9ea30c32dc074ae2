//! Marketplace upload schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::ModelError;

/// Columns of the marketplace upload format, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetColumn {
    ProductId,
    ProductIdType,
    ItemName,
    BrandName,
    Manufacturer,
    ProductDescription,
    ItemType,
    StandardPrice,
    Quantity,
    ProductTaxCode,
    ConditionType,
    PartNumber,
    ItemWeight,
    ItemLength,
    ItemWidth,
    ItemHeight,
    ListPrice,
    FulfillmentChannel,
    FitmentYear,
    FitmentMake,
    FitmentModel,
}

impl TargetColumn {
    /// Columns present in every output table.
    pub const BASE: [TargetColumn; 18] = [
        TargetColumn::ProductId,
        TargetColumn::ProductIdType,
        TargetColumn::ItemName,
        TargetColumn::BrandName,
        TargetColumn::Manufacturer,
        TargetColumn::ProductDescription,
        TargetColumn::ItemType,
        TargetColumn::StandardPrice,
        TargetColumn::Quantity,
        TargetColumn::ProductTaxCode,
        TargetColumn::ConditionType,
        TargetColumn::PartNumber,
        TargetColumn::ItemWeight,
        TargetColumn::ItemLength,
        TargetColumn::ItemWidth,
        TargetColumn::ItemHeight,
        TargetColumn::ListPrice,
        TargetColumn::FulfillmentChannel,
    ];

    /// Trailing columns emitted only when the input carries fitment data.
    pub const FITMENT: [TargetColumn; 3] = [
        TargetColumn::FitmentYear,
        TargetColumn::FitmentMake,
        TargetColumn::FitmentModel,
    ];

    /// Output column order for a table with or without fitment columns.
    pub fn columns(with_fitment: bool) -> Vec<TargetColumn> {
        let mut columns = Self::BASE.to_vec();
        if with_fitment {
            columns.extend(Self::FITMENT);
        }
        columns
    }

    /// Header text as it appears in the upload file.
    pub fn header(self) -> &'static str {
        match self {
            Self::ProductId => "product-id",
            Self::ProductIdType => "product-id-type",
            Self::ItemName => "item-name",
            Self::BrandName => "brand-name",
            Self::Manufacturer => "manufacturer",
            Self::ProductDescription => "product-description",
            Self::ItemType => "item-type",
            Self::StandardPrice => "standard-price",
            Self::Quantity => "quantity",
            Self::ProductTaxCode => "product-tax-code",
            Self::ConditionType => "condition-type",
            Self::PartNumber => "part-number",
            Self::ItemWeight => "item-weight",
            Self::ItemLength => "item-length",
            Self::ItemWidth => "item-width",
            Self::ItemHeight => "item-height",
            Self::ListPrice => "list-price",
            Self::FulfillmentChannel => "fulfillment-channel",
            Self::FitmentYear => "fitment-year",
            Self::FitmentMake => "fitment-make",
            Self::FitmentModel => "fitment-model",
        }
    }
}

impl fmt::Display for TargetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for TargetColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::columns(true)
            .into_iter()
            .find(|column| column.header() == s)
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}

/// Kind of identifier carried in `product-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductIdType {
    #[default]
    Sku,
    Upc,
}

impl ProductIdType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sku => "SKU",
            Self::Upc => "UPC",
        }
    }
}

impl fmt::Display for ProductIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle applicability values for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fitment {
    #[serde(rename = "fitment-year")]
    pub year: String,
    #[serde(rename = "fitment-make")]
    pub make: String,
    #[serde(rename = "fitment-model")]
    pub model: String,
}

/// One fully populated row of the upload format.
///
/// `fitment` is `None` when the output table carries no fitment columns;
/// within one table it is either set on every row or on none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetRow {
    pub product_id: String,
    pub product_id_type: ProductIdType,
    pub item_name: String,
    pub brand_name: String,
    pub manufacturer: String,
    pub product_description: String,
    pub item_type: String,
    pub standard_price: f64,
    pub quantity: i64,
    pub product_tax_code: String,
    pub condition_type: Condition,
    pub part_number: String,
    pub item_weight: String,
    pub item_length: String,
    pub item_width: String,
    pub item_height: String,
    pub list_price: f64,
    pub fulfillment_channel: String,
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub fitment: Option<Fitment>,
}

impl TargetRow {
    /// Renders one cell as text, `None` for fitment columns on a row without
    /// fitment data.
    pub fn cell(&self, column: TargetColumn) -> Option<String> {
        let text = match column {
            TargetColumn::ProductId => self.product_id.clone(),
            TargetColumn::ProductIdType => self.product_id_type.to_string(),
            TargetColumn::ItemName => self.item_name.clone(),
            TargetColumn::BrandName => self.brand_name.clone(),
            TargetColumn::Manufacturer => self.manufacturer.clone(),
            TargetColumn::ProductDescription => self.product_description.clone(),
            TargetColumn::ItemType => self.item_type.clone(),
            TargetColumn::StandardPrice => self.standard_price.to_string(),
            TargetColumn::Quantity => self.quantity.to_string(),
            TargetColumn::ProductTaxCode => self.product_tax_code.clone(),
            TargetColumn::ConditionType => self.condition_type.to_string(),
            TargetColumn::PartNumber => self.part_number.clone(),
            TargetColumn::ItemWeight => self.item_weight.clone(),
            TargetColumn::ItemLength => self.item_length.clone(),
            TargetColumn::ItemWidth => self.item_width.clone(),
            TargetColumn::ItemHeight => self.item_height.clone(),
            TargetColumn::ListPrice => self.list_price.to_string(),
            TargetColumn::FulfillmentChannel => self.fulfillment_channel.clone(),
            TargetColumn::FitmentYear => self.fitment.as_ref()?.year.clone(),
            TargetColumn::FitmentMake => self.fitment.as_ref()?.make.clone(),
            TargetColumn::FitmentModel => self.fitment.as_ref()?.model.clone(),
        };
        Some(text)
    }
}
