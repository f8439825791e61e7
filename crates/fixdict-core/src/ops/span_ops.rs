use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{attrs, ContainerKind, VersionedDictionary};
use crate::normalize::normalize_deprecated_marker;
use crate::report::{ConsolidationReport, WarningKind};
use crate::span::VersionSpan;

/// Write `FromVersion` and `Deprecated` onto newest-version containers
///
/// The computed deprecation wins: a disagreeing marker is replaced and a
/// missing one is added, each with a warning. A container whose span is empty
/// (no segment in any version) gets no annotation.
///
/// # Errors
/// * `MissingLatestSnapshot` - If the newest version was never loaded
pub fn annotate_spans(
    dict: &mut VersionedDictionary,
    kind: ContainerKind,
    spans: &BTreeMap<String, VersionSpan>,
    report: &mut ConsolidationReport,
) -> Result<()> {
    let catalog = dict.catalog().clone();
    let latest = dict.latest_mut()?;
    let table = latest.table_mut(kind.table());

    for (key, span) in spans {
        let Some(row) = table.first_mut(key) else {
            continue;
        };
        let subject = format!("{} {}", kind.as_str(), key);

        let Some(from) = span.first_present() else {
            report.warn(
                WarningKind::NoSegmentContents,
                &subject,
                "No segment contents in any version",
            );
            continue;
        };
        row.insert(attrs::FROM_VERSION.to_string(), catalog.label(from).to_string());

        let Some(deprecated) = span.deprecated_in(&catalog) else {
            continue;
        };
        let computed = catalog.label(deprecated).to_string();
        match row.get(attrs::DEPRECATED) {
            None => {
                report.warn(
                    WarningKind::MissingDeprecation,
                    &subject,
                    format!("Missing deprecation at {}. Adding it.", computed),
                );
            }
            Some(marker) => {
                let repaired = normalize_deprecated_marker(marker, &catalog);
                let effective = repaired.as_deref().unwrap_or(marker.as_str());
                if effective == computed {
                    if repaired.is_some() {
                        report.warn(
                            WarningKind::MalformedDeprecation,
                            &subject,
                            format!("Renaming bad deprecated version '{}' to {}", marker, computed),
                        );
                    }
                } else {
                    report.warn(
                        WarningKind::StaleDeprecation,
                        &subject,
                        format!("Deprecated marker '{}' replaced by computed {}", marker, computed),
                    );
                }
            }
        }
        row.insert(attrs::DEPRECATED.to_string(), computed);
    }

    Ok(())
}
