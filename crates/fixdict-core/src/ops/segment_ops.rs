use crate::diff::sort_segment_rows;
use crate::model::{attrs, VersionedDictionary};
use crate::report::{ConsolidationReport, WarningKind};

/// Sort every segment of every version by `Position`
///
/// Returns the number of segments sorted.
pub fn sort_segments(dict: &mut VersionedDictionary) -> usize {
    let mut sorted = 0;
    for (_, snapshot) in dict.snapshots_mut() {
        for rows in snapshot.segments.values_mut() {
            sort_segment_rows(rows);
            sorted += 1;
        }
    }
    sorted
}

/// Report segment rows whose `TagText` resolves to neither a field nor a component
///
/// Resolution is within the row's own version. Returns the number of
/// unresolved rows.
pub fn check_segment_references(dict: &VersionedDictionary, report: &mut ConsolidationReport) -> usize {
    let mut unresolved = 0;

    for (ordinal, snapshot) in dict.snapshots() {
        let label = dict.catalog().label(ordinal);
        for (msg_id, rows) in snapshot.segments.iter() {
            for row in rows {
                let resolved = match row.get(attrs::TAG_TEXT) {
                    Some(text) if text.parse::<u32>().is_ok() => snapshot.fields.contains_key(text),
                    Some(text) => snapshot.components.contains_key(text),
                    None => false,
                };
                if !resolved {
                    unresolved += 1;
                    report.warn(
                        WarningKind::UnresolvedSegmentReference,
                        format!("segment {}", msg_id),
                        format!(
                            "Row '{}' of {} resolves to no field or component",
                            row.get(attrs::TAG_TEXT).map(String::as_str).unwrap_or(""),
                            label
                        ),
                    );
                }
            }
        }
    }

    unresolved
}
