//! Field synthesis for the marketplace upload format.
//!
//! Takes a [`parts_ingest::CanonicalTable`] and derives one [`TargetRow`]
//! per row:
//!
//! - **synthesize**: per-field source priority and fallback defaults
//! - **text**: title and description assembly with length caps
//! - **pricing**: list price derivation
//! - **output**: the [`OutputTable`] frame and its CSV serialization
//!
//! [`TargetRow`]: parts_model::TargetRow

mod error;
mod output;
mod pricing;
mod synthesize;
mod text;

pub use error::{Result, TransformError};
pub use output::OutputTable;
pub use pricing::{list_price, round_to_cents};
pub use synthesize::{
    DEFAULT_BRAND, DEFAULT_ITEM_TYPE, has_fitment, normalize_condition, placeholder_id,
    synthesize_row, transform, transform_with_options,
};
pub use text::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, DescriptionParts, ELLIPSIS, SENTENCE_SEPARATOR,
    TITLE_SEPARATOR, TitleParts, build_description, build_title, truncate_with_ellipsis,
};
