use std::collections::BTreeMap;

use crate::config::FieldIntroduction;
use crate::errors::{DictError, Result};
use crate::introduction::resolve_field_introduction;
use crate::model::record::{parse_tag, required_attr};
use crate::model::{attrs, TableKind, VersionedDictionary};
use crate::normalize::{is_funny_field_name, tidy_field_name};
use crate::report::{ConsolidationReport, WarningKind};

/// Field name to tag, across every version
pub type FieldNameIndex = BTreeMap<String, u32>;

/// Tidy field names in every version and build the name → tag lookup
///
/// `/` becomes a space and names are trimmed. Names that are not an upper-case
/// letter followed by letters and digits are reported. When versions disagree
/// the newest spelling of a name wins its lookup entry.
///
/// # Errors
/// * `MalformedTag` - If a field key is not a non-negative integer
pub fn tidy_field_names(
    dict: &mut VersionedDictionary,
    report: &mut ConsolidationReport,
) -> Result<FieldNameIndex> {
    let table = TableKind::Fields.name();
    let catalog = dict.catalog().clone();
    let mut index = FieldNameIndex::new();

    for (ordinal, snapshot) in dict.snapshots_mut() {
        for (key, rows) in snapshot.fields.iter_mut() {
            let tag = parse_tag(table, key)?;
            for row in rows.iter_mut() {
                let Some(raw) = row.get(attrs::FIELD_NAME) else {
                    report.warn(
                        WarningKind::FunnyFieldName,
                        format!("tag {}", tag),
                        format!("Field has no name in {}", catalog.label(ordinal)),
                    );
                    continue;
                };
                let name = tidy_field_name(raw);
                if is_funny_field_name(&name) {
                    report.warn(
                        WarningKind::FunnyFieldName,
                        format!("tag {}", tag),
                        format!("Funny field name '{}' in {}", name, catalog.label(ordinal)),
                    );
                }
                row.insert(attrs::FIELD_NAME.to_string(), name.clone());
                index.insert(name, tag);
            }
        }
    }

    Ok(index)
}

struct FieldDerivation {
    key: String,
    from_version: String,
    enum_name: Option<String>,
}

/// Add `FromVersion` and `EnumName` to every field of the newest version
///
/// `EnumName` is the name of the field named by `UsesEnumsFromTag`, or the
/// field's own name when the newest enum table has values for its tag.
///
/// # Errors
/// * `MultipleRows` - If a field key holds more than one row
/// * `MalformedTag` - If a key or `UsesEnumsFromTag` is not a tag
/// * `TagBeyondCatalog` - If a tag exceeds every watermark
/// * `UnknownReference` - If `UsesEnumsFromTag` names a field the newest version lacks
/// * `MissingAttribute` - If a field with enumerated values has no `FieldName`
pub fn derive_fields(dict: &mut VersionedDictionary, rule: FieldIntroduction) -> Result<()> {
    let table = TableKind::Fields.name();
    let latest = dict.latest()?;
    let mut derivations = Vec::with_capacity(latest.fields.len());

    for (key, rows) in latest.fields.iter() {
        if rows.len() != 1 {
            return Err(DictError::MultipleRows {
                table: table.to_string(),
                key: key.clone(),
                count: rows.len(),
            });
        }
        let row = &rows[0];
        let tag = parse_tag(table, key)?;
        let from = resolve_field_introduction(dict, tag, rule)?;

        let enum_name = match row.get(attrs::USES_ENUMS_FROM_TAG) {
            Some(uses) => {
                let uses_tag = parse_tag(table, uses)?;
                let name = latest
                    .fields
                    .first(&uses_tag.to_string())
                    .and_then(|source| source.get(attrs::FIELD_NAME))
                    .ok_or_else(|| DictError::UnknownReference {
                        context: format!("UsesEnumsFromTag of field {}", key),
                        entity: "field".to_string(),
                        key: uses.clone(),
                    })?;
                Some(name.clone())
            }
            None if latest.enums.contains_key(key) => {
                Some(required_attr(row, table, key, attrs::FIELD_NAME)?.to_string())
            }
            None => None,
        };

        derivations.push(FieldDerivation {
            key: key.clone(),
            from_version: dict.catalog().label(from).to_string(),
            enum_name,
        });
    }

    let latest = dict.latest_mut()?;
    for derivation in derivations {
        if let Some(row) = latest.fields.first_mut(&derivation.key) {
            row.insert(attrs::FROM_VERSION.to_string(), derivation.from_version);
            if let Some(enum_name) = derivation.enum_name {
                row.insert(attrs::ENUM_NAME.to_string(), enum_name);
            }
        }
    }

    Ok(())
}
