//! Decoding raw delimited text into header and row strings.

use csv::ReaderBuilder;

use crate::error::{ParseError, Result};

/// Parsed input before any header resolution or cleaning.
///
/// Headers are trimmed; cells are kept exactly as read. Rows shorter than the
/// header are padded with empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Rejects UTF-16 input and strips a UTF-8 byte-order mark.
fn decode(bytes: &[u8]) -> Result<&str> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(ParseError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(ParseError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        });
    }
    let text = std::str::from_utf8(bytes).map_err(|source| ParseError::InvalidEncoding { source })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Reads comma-delimited text with the first row as header.
///
/// # Errors
///
/// Fails when the bytes are not UTF-8, when there is no header row, or when a
/// data row carries more fields than the header.
pub fn read_raw_table(bytes: &[u8]) -> Result<RawTable> {
    let text = decode(bytes)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(ParseError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(ParseError::RaggedRow {
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }
    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "read delimited input"
    );
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_trims_headers() {
        let table = read_raw_table(b" Part Number ,Price\nAB-1, $5\n").unwrap();
        assert_eq!(table.headers, vec!["Part Number", "Price"]);
        assert_eq!(table.rows, vec![vec!["AB-1".to_string(), " $5".to_string()]]);
    }

    #[test]
    fn test_read_with_bom() {
        let table = read_raw_table("\u{feff}sku,qty\nA,1\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["sku", "qty"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = read_raw_table(b"a,b,c\n1\n").unwrap();
        assert_eq!(table.rows[0], vec!["1", "", ""]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = read_raw_table(b"a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::RaggedRow {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_quoted_fields() {
        let table = read_raw_table(b"title,price\n\"Pad, front\",\"$1,200.00\"\n").unwrap();
        assert_eq!(table.rows[0], vec!["Pad, front", "$1,200.00"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read_raw_table(b""), Err(ParseError::MissingHeader)));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = read_raw_table(&[b'a', b',', 0xC3, 0x28, b'\n']).unwrap_err();
        assert!(matches!(err, ParseError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_utf16_bom() {
        let err = read_raw_table(&[0xFF, 0xFE, b'a', 0]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedEncoding {
                encoding: "UTF-16 LE"
            }
        ));
    }
}
