use std::collections::BTreeMap;

use crate::catalog::VersionOrdinal;
use crate::errors::Result;
use crate::introduction::enum_value_introduced;
use crate::model::record::{parse_tag, required_attr};
use crate::model::{attrs, TableKind, VersionedDictionary};
use crate::normalize::{check_enum_name, normalize_deprecated_marker, synthesize_name, NameAnomaly};
use crate::report::{ConsolidationReport, WarningKind};

/// Derive display names and introduction versions for the newest enum table
///
/// For every enumerated value of the newest version:
/// - a missing `EnumName` is synthesized from `Description`
/// - the name is checked against the earlier names of the same tag
/// - `FromVersion` is set to the first version holding the (tag, literal) pair
/// - a malformed `Deprecated` marker is repaired to its catalog label
///
/// Name lengths are tallied into `report.name_lengths`.
///
/// # Arguments
/// * `dict` - Dictionary whose newest snapshot is annotated
/// * `max_common_prefix` - Leading characters two names of one tag must differ within
/// * `report` - Receives data-quality warnings
///
/// # Errors
/// * `MalformedTag` - If an enum key is not a non-negative integer
/// * `MissingAttribute` - If a row has no `Enum` literal
/// * `MissingLatestSnapshot` - If the newest version was never loaded
pub fn derive_enums(
    dict: &mut VersionedDictionary,
    max_common_prefix: usize,
    report: &mut ConsolidationReport,
) -> Result<()> {
    let table = TableKind::Enums.name();

    // Introduction versions read every snapshot, so resolve them before mutating
    let mut introduced: BTreeMap<(String, String), VersionOrdinal> = BTreeMap::new();
    for (tag, rows) in dict.latest()?.enums.iter() {
        parse_tag(table, tag)?;
        for row in rows {
            let literal = required_attr(row, table, tag, attrs::ENUM)?;
            introduced.insert(
                (tag.clone(), literal.to_string()),
                enum_value_introduced(dict, tag, literal),
            );
        }
    }

    let catalog = dict.catalog().clone();
    let mut tally = std::mem::take(&mut report.name_lengths);
    let latest = dict.latest_mut()?;

    for (tag, rows) in latest.enums.iter_mut() {
        let mut seen: Vec<String> = Vec::with_capacity(rows.len());

        for row in rows.iter_mut() {
            let literal = row.get(attrs::ENUM).cloned().unwrap_or_default();
            let subject = format!("tag {} enum {}", tag, literal);

            let name = match row.get(attrs::ENUM_NAME) {
                Some(name) => name.clone(),
                None => {
                    let description = row.get(attrs::DESCRIPTION).cloned().unwrap_or_default();
                    let name = synthesize_name(&description);
                    if name.is_empty() {
                        report.warn(
                            WarningKind::EmptyEnumName,
                            &subject,
                            format!("No name in description '{}'", description),
                        );
                    }
                    row.insert(attrs::ENUM_NAME.to_string(), name.clone());
                    name
                }
            };

            for anomaly in check_enum_name(&name, &seen, max_common_prefix, &mut tally) {
                let (kind, message) = match anomaly {
                    NameAnomaly::Similar { other } => (
                        WarningKind::SimilarEnumName,
                        format!("Similar value names: {} and {}", name, other),
                    ),
                    NameAnomaly::Short => (
                        WarningKind::ShortEnumName,
                        format!("Short enum name '{}'", name),
                    ),
                    NameAnomaly::Numeric => (
                        WarningKind::NumericEnumName,
                        format!("Numeric enum name {}", name),
                    ),
                    NameAnomaly::Long { len, max } => (
                        WarningKind::LongEnumName,
                        format!("Long enum name {} ({} > {} characters)", name, len, max),
                    ),
                };
                report.warn(kind, &subject, message);
            }
            seen.push(name);

            if let Some(ordinal) = introduced.get(&(tag.clone(), literal.clone())) {
                row.insert(
                    attrs::FROM_VERSION.to_string(),
                    catalog.label(*ordinal).to_string(),
                );
            }

            if let Some(marker) = row.get(attrs::DEPRECATED).cloned() {
                if let Some(label) = normalize_deprecated_marker(&marker, &catalog) {
                    report.warn(
                        WarningKind::MalformedDeprecation,
                        &subject,
                        format!("Renaming bad deprecated version '{}' to {}", marker, label),
                    );
                    row.insert(attrs::DEPRECATED.to_string(), label);
                }
            }
        }
    }

    report.name_lengths = tally;
    Ok(())
}
