//! Listing ingestion and schema normalization.
//!
//! This crate turns loosely-structured auto parts listings (CSV text with
//! arbitrary header spellings) into a [`CanonicalTable`]:
//!
//! - **raw**: decode bytes and read header and rows with the `csv` crate
//! - **header**: resolve headers onto the canonical vocabulary, with the
//!   first-claim collision policy
//! - **clean**: price, quantity, weight and text cell cleaning
//! - **table**: the Polars-backed canonical table and its cell accessors
//!
//! # Example
//!
//! ```ignore
//! use parts_ingest::parse;
//!
//! let table = parse(b"Part Number,Price\nAB-100,$45.00\n")?;
//! assert_eq!(table.height(), 1);
//! ```

mod clean;
mod error;
mod header;
mod normalize;
mod polars_utils;
mod raw;
mod table;

// === Error Types ===
pub use error::{ParseError, Result};

// === Normalizer ===
pub use normalize::{normalize, parse, parse_bytes, parse_str};
pub use raw::{RawTable, read_raw_table};
pub use table::CanonicalTable;

// === Header Resolution ===
pub use header::{COLLISION_SUFFIX, ColumnResolution, Resolution, resolve_header, resolve_headers};

// === Cell Cleaning ===
pub use clean::{
    PLACEHOLDER_TOKENS, clean_price, clean_quantity, clean_text, clean_weight, is_missing,
    is_placeholder,
};

// === Polars Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
    parse_i64,
};
