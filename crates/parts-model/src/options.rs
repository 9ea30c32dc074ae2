//! Configuration for field synthesis.

use serde::{Deserialize, Serialize};

/// Marketplace title limit, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 200;
/// Description limit, in characters.
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 2000;
/// Multiplier applied to the standard price to derive the list price.
pub const DEFAULT_LIST_PRICE_MARKUP: f64 = 1.2;
pub const DEFAULT_TAX_CODE: &str = "A_GEN_TAX";
/// Merchant-fulfilled channel code.
pub const DEFAULT_FULFILLMENT_CHANNEL: &str = "DEFAULT";
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "AUTO-PART-";

/// Constants used while synthesizing target rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub title_max_chars: usize,
    pub description_max_chars: usize,
    pub list_price_markup: f64,
    pub tax_code: String,
    pub fulfillment_channel: String,
    /// Prefix for identifiers generated for rows without a part number.
    pub placeholder_prefix: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
            list_price_markup: DEFAULT_LIST_PRICE_MARKUP,
            tax_code: DEFAULT_TAX_CODE.to_string(),
            fulfillment_channel: DEFAULT_FULFILLMENT_CHANNEL.to_string(),
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
        }
    }
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_list_price_markup(mut self, markup: f64) -> Self {
        self.list_price_markup = markup;
        self
    }

    #[must_use]
    pub fn with_tax_code(mut self, code: impl Into<String>) -> Self {
        self.tax_code = code.into();
        self
    }

    #[must_use]
    pub fn with_fulfillment_channel(mut self, channel: impl Into<String>) -> Self {
        self.fulfillment_channel = channel.into();
        self
    }

    #[must_use]
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    #[must_use]
    pub fn with_description_max_chars(mut self, max: usize) -> Self {
        self.description_max_chars = max;
        self
    }
}
