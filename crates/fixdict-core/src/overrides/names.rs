use std::collections::BTreeSet;

use super::EnumNameOverride;
use crate::errors::{DictError, Result};
use crate::model::{attrs, RecordTable};

const CONTEXT: &str = "enum name overrides";

/// Row index of the value `literal` under `tag`
pub(crate) fn find_enum_row(
    enums: &RecordTable,
    context: &str,
    tag: &str,
    literal: &str,
) -> Result<usize> {
    let rows = enums.get(tag).ok_or_else(|| DictError::UnknownReference {
        context: context.to_string(),
        entity: "tag".to_string(),
        key: tag.to_string(),
    })?;
    rows.iter()
        .position(|row| row.get(attrs::ENUM).map(String::as_str) == Some(literal))
        .ok_or_else(|| DictError::UnknownEnumValue {
            context: context.to_string(),
            tag: tag.to_string(),
            value: literal.to_string(),
        })
}

/// Give enumerated values their externally supplied display names
///
/// Runs before name synthesis. A value that already carries a name, or is
/// named twice in the batch, is a duplicate.
///
/// # Returns
/// The number of names applied
///
/// # Errors
/// * `UnknownReference` - If a tag has no enumerated values
/// * `UnknownEnumValue` - If a tag lacks the value
/// * `DuplicateEnumName` - If the value is already named
pub fn apply_enum_names(enums: &mut RecordTable, overrides: &[EnumNameOverride]) -> Result<usize> {
    let mut planned = Vec::with_capacity(overrides.len());
    let mut claimed = BTreeSet::new();

    for entry in overrides {
        let index = find_enum_row(enums, CONTEXT, &entry.tag, &entry.value)?;
        let already_named = enums
            .get(&entry.tag)
            .and_then(|rows| rows.get(index))
            .is_some_and(|row| row.contains_key(attrs::ENUM_NAME));
        if already_named || !claimed.insert((entry.tag.as_str(), index)) {
            return Err(DictError::DuplicateEnumName {
                context: CONTEXT.to_string(),
                tag: entry.tag.clone(),
                value: entry.value.clone(),
            });
        }
        planned.push((entry, index));
    }

    for (entry, index) in &planned {
        if let Some(row) = enums.get_mut(&entry.tag).and_then(|rows| rows.get_mut(*index)) {
            row.insert(attrs::ENUM_NAME.to_string(), entry.name.clone());
        }
    }

    Ok(planned.len())
}
