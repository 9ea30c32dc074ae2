//! Listing condition vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marketplace condition values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    Used,
    Refurbished,
}

/// Source spellings (lower-case, trimmed) and the condition they map to.
///
/// The empty string is listed explicitly so a blank cell reads as `New`.
pub const CONDITION_VOCABULARY: &[(&str, Condition)] = &[
    ("new", Condition::New),
    ("brand new", Condition::New),
    ("brand-new", Condition::New),
    ("", Condition::New),
    ("used", Condition::Used),
    ("pre-owned", Condition::Used),
    ("preowned", Condition::Used),
    ("refurbished", Condition::Refurbished),
    ("rebuilt", Condition::Refurbished),
    ("remanufactured", Condition::Refurbished),
];

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
            Self::Refurbished => "Refurbished",
        }
    }

    /// Looks up a raw value in the vocabulary, ignoring case and surrounding
    /// whitespace. Returns `None` for values outside the vocabulary.
    pub fn lookup(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase();
        CONDITION_VOCABULARY
            .iter()
            .find(|(spelling, _)| *spelling == key)
            .map(|(_, condition)| *condition)
    }

    /// Normalizes a raw value; anything unrecognised becomes `New`.
    pub fn normalize(raw: &str) -> Self {
        Self::lookup(raw).unwrap_or_default()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
