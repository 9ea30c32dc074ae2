//! Polars AnyValue utility functions.
//!
//! Helpers for reading canonical table cells regardless of their dtype, and
//! for parsing numeric text.

use polars::prelude::*;

/// Renders a cell as text. Nulls become empty; floats drop trailing zeros.
///
/// Canonical tables only hold `Float64`, `Int64` and `String` columns; any
/// other dtype falls back to its Polars display form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Like [`any_to_string`], but `None` when the text is blank.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a float without trailing fractional zeros (`2.50` -> `2.5`).
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Numeric value of a cell; string cells are parsed.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Float64(v) => Some(v),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Integer value of a cell; floats truncate and string cells are parsed.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int64(v) => Some(v),
        AnyValue::Float64(v) => Some(v as i64),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Parses trimmed text as f64; blank text is `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.parse().ok()).flatten()
}

/// Parses trimmed text as i64; blank text is `None`.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.parse().ok()).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(2.5), "2.5");
        assert_eq!(format_numeric(4.0), "4");
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn test_any_to_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int64(3)), "3");
        assert_eq!(any_to_string(AnyValue::Float64(45.5)), "45.5");
        assert_eq!(any_to_string(AnyValue::String("Bosch")), "Bosch");
        assert_eq!(any_to_string_non_empty(AnyValue::String("  ")), None);
    }

    #[test]
    fn test_any_to_numbers() {
        assert_eq!(any_to_f64(AnyValue::String("19.99")), Some(19.99));
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_i64(AnyValue::Float64(3.9)), Some(3));
        assert_eq!(any_to_i64(AnyValue::String("x")), None);
        assert_eq!(any_to_i64(AnyValue::String(" 12 ")), Some(12));
        assert_eq!(parse_f64("   "), None);
    }
}
