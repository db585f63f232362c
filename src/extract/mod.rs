// src/extract/mod.rs
// =============================================================================
// Contact extraction.
//
// Submodules:
// - email: text pass and mailto: pass
// - phone: three prioritized patterns, the validator and formatting
// - dedup: value keys and the set of values already reported
//
// Extractors return plain Vec<String> in first-seen order. They drop
// duplicates within one call, but deciding whether a value is new for the
// whole crawl is the Deduplicator's job.
// =============================================================================

pub mod dedup;
pub mod email;
pub mod phone;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use dedup::{dedup_key, Deduplicator};
pub use email::extract_emails_from_text;
pub use phone::{clean_international_phone, extract_phones, is_valid_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKind::Email => f.write_str("email"),
            ContactKind::Phone => f.write_str("phone"),
        }
    }
}

/// One finding. `source_url` is the raw URL of the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
    pub source_url: String,
}

/// Drops repeated strings, keeping the first occurrence of each.
pub(crate) fn unique_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
