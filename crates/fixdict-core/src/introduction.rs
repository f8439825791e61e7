//! Version-introduction resolver
//!
//! Earliest catalog version of a field or an enumerated value.

use crate::catalog::VersionOrdinal;
use crate::config::FieldIntroduction;
use crate::errors::Result;
use crate::model::{attrs, VersionedDictionary};

/// First version whose max-tag watermark covers `tag`
///
/// # Errors
///
/// `TagBeyondCatalog` if the tag exceeds every watermark.
pub fn field_introduced(dict: &VersionedDictionary, tag: u32) -> Result<VersionOrdinal> {
    dict.catalog().tag_introduced(tag)
}

/// First loaded version whose field table holds `tag`
pub fn field_first_present(dict: &VersionedDictionary, tag: u32) -> Option<VersionOrdinal> {
    let key = tag.to_string();
    dict.snapshots()
        .find(|(_, snap)| snap.fields.contains_key(&key))
        .map(|(ordinal, _)| ordinal)
}

/// FromVersion of a field under the configured rule
pub fn resolve_field_introduction(
    dict: &VersionedDictionary,
    tag: u32,
    rule: FieldIntroduction,
) -> Result<VersionOrdinal> {
    match rule {
        FieldIntroduction::Watermark => field_introduced(dict, tag),
        FieldIntroduction::Presence => match field_first_present(dict, tag) {
            Some(ordinal) => Ok(ordinal),
            None => field_introduced(dict, tag),
        },
    }
}

/// First version whose enum table holds the exact (tag, literal) pair
///
/// Falls back to the newest version when no snapshot has the pair.
pub fn enum_value_introduced(dict: &VersionedDictionary, tag: &str, literal: &str) -> VersionOrdinal {
    dict.snapshots()
        .find(|(_, snap)| {
            snap.enums.get(tag).is_some_and(|rows| {
                rows.iter()
                    .any(|row| row.get(attrs::ENUM).map(String::as_str) == Some(literal))
            })
        })
        .map(|(ordinal, _)| ordinal)
        .unwrap_or_else(|| dict.catalog().latest())
}
