//! Shared vocabulary for auto parts listing harmonization.
//!
//! - **field**: canonical field names and the header spellings that map onto them
//! - **condition**: condition vocabulary for the `condition-type` column
//! - **target**: upload format columns and the [`TargetRow`] record
//! - **options**: synthesis constants ([`SynthesisOptions`])

pub mod condition;
pub mod error;
pub mod field;
pub mod options;
pub mod target;

pub use condition::{CONDITION_VOCABULARY, Condition};
pub use error::{ModelError, Result};
pub use field::{CanonicalField, FieldKind, HEADER_VOCABULARY};
pub use options::SynthesisOptions;
pub use target::{Fitment, ProductIdType, TargetColumn, TargetRow};
