use super::GlossaryEntry;
use crate::model::{attrs, AttributeBag, RecordTable};
use crate::normalize::eq_ignore_case;
use crate::ops::FieldNameIndex;
use crate::report::{ConsolidationReport, WarningKind};

/// Text between the first `[` and the first `]` of a glossary label
pub fn extract_field_name(label: &str) -> Option<&str> {
    let start = label.find('[')?;
    let end = label.find(']')?;
    label.get(start + 1..end)
}

fn find_value<'a>(rows: &'a mut [AttributeBag], value_name: &str) -> Option<&'a mut AttributeBag> {
    rows.iter_mut().find(|row| {
        [attrs::ENUM_NAME, attrs::ENUM]
            .iter()
            .filter_map(|attribute| row.get(*attribute))
            .any(|candidate| eq_ignore_case(candidate, value_name))
    })
}

/// Apply glossary descriptions to enumerated values
///
/// The field comes from the bracketed part of the label and is resolved
/// through `field_tags`; the value matches `EnumName` or `Enum` ignoring
/// case. Entries without a field, and value names that are empty or start
/// with `placeholder`, are skipped with a note. A description that replaces a
/// longer one is still applied, with a warning.
///
/// # Returns
/// The number of descriptions applied
pub fn apply_glossary(
    enums: &mut RecordTable,
    field_tags: &FieldNameIndex,
    entries: &[GlossaryEntry],
    placeholder: char,
    report: &mut ConsolidationReport,
) -> usize {
    let mut applied = 0;

    for entry in entries {
        let Some(field_name) = extract_field_name(&entry.label) else {
            if !entry.label.trim().is_empty() {
                report.note(
                    "glossary",
                    format!("Entry not associated with a field: {}", entry.label.trim()),
                );
                report.overrides.glossary_skipped += 1;
            }
            continue;
        };

        let Some(tag) = field_tags.get(field_name) else {
            report.warn(
                WarningKind::UnknownGlossaryField,
                format!("field {}", field_name),
                format!("Unknown field in glossary: {}", field_name),
            );
            continue;
        };

        if entry.value_name.is_empty() || entry.value_name.starts_with(placeholder) {
            report.note(
                format!("field {}", field_name),
                format!("Ignoring placeholder value '{}'", entry.value_name),
            );
            report.overrides.glossary_skipped += 1;
            continue;
        }

        let Some(row) = enums
            .get_mut(&tag.to_string())
            .and_then(|rows| find_value(rows, &entry.value_name))
        else {
            report.warn(
                WarningKind::UnknownGlossaryValue,
                format!("field {}", field_name),
                format!(
                    "Unknown glossary value '{}' for field {}",
                    entry.value_name, field_name
                ),
            );
            continue;
        };

        let existing = row
            .get(attrs::DESCRIPTION)
            .map(|d| d.chars().count())
            .unwrap_or(0);
        if existing > entry.description.chars().count() {
            report.warn(
                WarningKind::ShorterGlossaryDescription,
                format!("field {} value {}", field_name, entry.value_name),
                "Replacing longer description with shorter",
            );
        }
        row.insert(attrs::DESCRIPTION.to_string(), entry.description.clone());
        applied += 1;
    }

    report.overrides.glossary_applied += applied;
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bag;

    fn setup() -> (RecordTable, FieldNameIndex) {
        let mut enums = RecordTable::new();
        enums.push(
            "54",
            bag([("Enum", "1"), ("EnumName", "Buy"), ("Description", "Buy")]),
        );
        enums.push(
            "54",
            bag([
                ("Enum", "2"),
                ("EnumName", "Sell"),
                ("Description", "Sell side of a trade, long text"),
            ]),
        );
        let mut tags = FieldNameIndex::new();
        tags.insert("Side".to_string(), 54);
        (enums, tags)
    }

    fn entry(label: &str, value: &str, description: &str) -> GlossaryEntry {
        GlossaryEntry {
            label: label.to_string(),
            value_name: value.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_extract_field_name() {
        assert_eq!(extract_field_name("Side [Side]"), Some("Side"));
        assert_eq!(extract_field_name("no brackets"), None);
        assert_eq!(extract_field_name("bad ]order["), None);
    }

    #[test]
    fn test_matches_name_or_literal_ignoring_case() {
        let (mut enums, tags) = setup();
        let mut report = ConsolidationReport::new();
        let applied = apply_glossary(
            &mut enums,
            &tags,
            &[
                entry("[Side]", "buy", "Buying a security"),
                entry("[Side]", "2", "Selling"),
            ],
            '?',
            &mut report,
        );
        assert_eq!(applied, 2);
        let rows = enums.get("54").unwrap();
        assert_eq!(rows[0]["Description"], "Buying a security");
        assert_eq!(rows[1]["Description"], "Selling");
        assert_eq!(report.count(WarningKind::ShorterGlossaryDescription), 1);
        assert_eq!(report.overrides.glossary_applied, 2);
    }

    #[test]
    fn test_placeholders_are_notes_not_warnings() {
        let (mut enums, tags) = setup();
        let mut report = ConsolidationReport::new();
        let applied = apply_glossary(
            &mut enums,
            &tags,
            &[entry("[Side]", "?Cross", "x"), entry("[Side]", "", "y")],
            '?',
            &mut report,
        );
        assert_eq!(applied, 0);
        assert!(!report.has_warnings());
        assert_eq!(report.notes.len(), 2);
        assert_eq!(report.overrides.glossary_skipped, 2);
    }

    #[test]
    fn test_unknown_field_and_value_warn() {
        let (mut enums, tags) = setup();
        let mut report = ConsolidationReport::new();
        apply_glossary(
            &mut enums,
            &tags,
            &[entry("[Nope]", "A", "x"), entry("[Side]", "Cross", "y")],
            '?',
            &mut report,
        );
        assert_eq!(report.count(WarningKind::UnknownGlossaryField), 1);
        assert_eq!(report.count(WarningKind::UnknownGlossaryValue), 1);
    }
}
