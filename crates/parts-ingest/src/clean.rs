//! Cell cleaning for canonical columns.

use crate::polars_utils::{parse_f64, parse_i64};

/// Literal tokens that stand for "no value" in text cells (case-sensitive).
pub const PLACEHOLDER_TOKENS: [&str; 4] = ["nan", "None", "NaN", "null"];

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Weight unit suffixes, longest first so `lbs` is not left as `s`.
const WEIGHT_UNITS: [&str; 2] = ["lbs", "lb"];

/// Returns true when a trimmed cell is one of [`PLACEHOLDER_TOKENS`].
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_TOKENS.contains(&value.trim())
}

/// Returns true for empty, whitespace-only, or placeholder cells.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty() || is_placeholder(value)
}

/// Trims a text cell and blanks placeholder tokens.
pub fn clean_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_placeholder(trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parses a price after stripping currency symbols and thousands separators.
///
/// Unparsable values are treated as missing.
pub fn clean_price(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|ch| !CURRENCY_SYMBOLS.contains(ch) && *ch != ',')
        .collect();
    parse_f64(&stripped).and_then(finite)
}

/// Parses a quantity; unparsable or missing values become zero.
///
/// Decimal text is truncated toward zero (`"3.0"` reads as 3).
pub fn clean_quantity(raw: &str) -> i64 {
    parse_i64(raw)
        .or_else(|| {
            parse_f64(raw)
                .and_then(finite)
                .map(|value| value.trunc() as i64)
        })
        .unwrap_or(0)
}

/// Parses a weight after stripping a trailing `lb`/`lbs` unit.
///
/// Unit matching ignores case. Unparsable values are treated as missing.
pub fn clean_weight(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let number = WEIGHT_UNITS
        .iter()
        .find(|unit| lower.ends_with(*unit))
        .map_or(trimmed, |unit| &trimmed[..trimmed.len() - unit.len()]);
    parse_f64(number).and_then(finite)
}
