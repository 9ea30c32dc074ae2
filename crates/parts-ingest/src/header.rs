//! Header resolution onto the canonical vocabulary.
//!
//! Each source header is matched case-insensitively against
//! [`parts_model::HEADER_VOCABULARY`]. Resolution walks headers in input
//! order, so when two headers match the same canonical field the first one
//! claims it and the later one is kept as `<header>_original`. Headers outside
//! the vocabulary are kept lower-cased as passthrough columns.

use std::collections::BTreeSet;

use serde::Serialize;

use parts_model::CanonicalField;

/// Suffix given to a header whose canonical field was already claimed.
pub const COLLISION_SUFFIX: &str = "_original";

/// How a source header ended up in the canonical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum Resolution {
    /// Carries the canonical field under its canonical name.
    Canonical(CanonicalField),
    /// Matched a field that an earlier header had already claimed.
    Duplicate(CanonicalField),
    /// Outside the vocabulary.
    Passthrough,
}

/// Mapping of one source header to its column in the canonical table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnResolution {
    /// Trimmed source header.
    pub source: String,
    /// Column name in the canonical table.
    pub column: String,
    pub resolution: Resolution,
}

impl ColumnResolution {
    /// Canonical field this column carries, if any.
    pub fn field(&self) -> Option<CanonicalField> {
        match self.resolution {
            Resolution::Canonical(field) => Some(field),
            Resolution::Duplicate(_) | Resolution::Passthrough => None,
        }
    }
}

/// Resolves a single header, ignoring case and surrounding whitespace.
pub fn resolve_header(header: &str) -> Option<CanonicalField> {
    CanonicalField::from_header(header)
}

/// Resolves every header of one table, applying the collision policy.
///
/// Column names in the result are unique. A name that is still taken after
/// resolution (for example two identical unrecognised headers) receives a
/// numeric suffix.
pub fn resolve_headers(headers: &[String]) -> Vec<ColumnResolution> {
    let mut claimed = BTreeSet::new();
    let mut taken = BTreeSet::new();
    let mut resolved = Vec::with_capacity(headers.len());

    for header in headers {
        let source = header.trim().to_string();
        let (name, resolution) = match resolve_header(&source) {
            Some(field) if claimed.insert(field) => {
                (field.as_str().to_string(), Resolution::Canonical(field))
            }
            Some(field) => {
                tracing::warn!(
                    header = %source,
                    field = %field,
                    "canonical field already claimed, keeping column as duplicate"
                );
                (
                    format!("{source}{COLLISION_SUFFIX}"),
                    Resolution::Duplicate(field),
                )
            }
            None => (source.to_lowercase(), Resolution::Passthrough),
        };
        let column = unique_name(&name, &taken);
        taken.insert(column.clone());
        tracing::debug!(header = %source, column = %column, ?resolution, "resolved header");
        resolved.push(ColumnResolution {
            source,
            column,
            resolution,
        });
    }
    resolved
}

fn unique_name(name: &str, taken: &BTreeSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{name}_{counter}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(resolve_header("  UNIT PRICE "), Some(CanonicalField::Price));
        assert_eq!(resolve_header("Qty"), Some(CanonicalField::Quantity));
        assert_eq!(resolve_header("Warehouse Bin"), None);
    }

    #[test]
    fn test_collision_keeps_first_claim() {
        let resolved = resolve_headers(&headers(&["Part Number", "SKU", "Price"]));
        assert_eq!(resolved[0].column, "part_number");
        assert_eq!(
            resolved[0].resolution,
            Resolution::Canonical(CanonicalField::PartNumber)
        );
        assert_eq!(resolved[1].column, "SKU_original");
        assert_eq!(
            resolved[1].resolution,
            Resolution::Duplicate(CanonicalField::PartNumber)
        );
        assert_eq!(resolved[1].field(), None);
        assert_eq!(resolved[2].column, "price");
    }

    #[test]
    fn test_passthrough_is_lowercased() {
        let resolved = resolve_headers(&headers(&["Warehouse Bin"]));
        assert_eq!(resolved[0].column, "warehouse bin");
        assert_eq!(resolved[0].resolution, Resolution::Passthrough);
    }

    #[test]
    fn test_repeated_unknown_headers_stay_unique() {
        let resolved = resolve_headers(&headers(&["Bin", "bin", "BIN"]));
        let columns: Vec<&str> = resolved.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(columns, vec!["bin", "bin_2", "bin_3"]);
    }

    #[test]
    fn test_triple_collision() {
        let resolved = resolve_headers(&headers(&["Brand", "Manufacturer", "MFR"]));
        let columns: Vec<&str> = resolved.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(
            columns,
            vec!["brand", "Manufacturer_original", "MFR_original"]
        );
    }
}
