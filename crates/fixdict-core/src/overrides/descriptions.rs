use super::names::find_enum_row;
use super::{DescriptionOverride, EnumDescriptionOverride};
use crate::errors::{DictError, Result};
use crate::model::{attrs, RecordTable};

fn apply_container_descriptions(
    table: &mut RecordTable,
    context: &str,
    entity: &str,
    overrides: &[DescriptionOverride],
) -> Result<usize> {
    if let Some(unknown) = overrides.iter().find(|o| table.first(&o.key).is_none()) {
        return Err(DictError::UnknownReference {
            context: context.to_string(),
            entity: entity.to_string(),
            key: unknown.key.clone(),
        });
    }

    for entry in overrides {
        if let Some(row) = table.first_mut(&entry.key) {
            row.insert(attrs::DESC.to_string(), entry.description.clone());
        }
    }
    Ok(overrides.len())
}

/// Replace message descriptions (`Desc`), keyed by MsgType
///
/// # Errors
/// * `UnknownReference` - If a MsgType is not in the table; nothing is changed
pub fn apply_message_descriptions(
    messages: &mut RecordTable,
    overrides: &[DescriptionOverride],
) -> Result<usize> {
    apply_container_descriptions(messages, "message descriptions", "message type", overrides)
}

/// Replace component descriptions (`Desc`), keyed by ComponentName
///
/// # Errors
/// * `UnknownReference` - If a component is not in the table; nothing is changed
pub fn apply_component_descriptions(
    components: &mut RecordTable,
    overrides: &[DescriptionOverride],
) -> Result<usize> {
    apply_container_descriptions(components, "component descriptions", "component", overrides)
}

/// Replace enumerated-value descriptions (`Description`)
///
/// # Errors
/// * `UnknownReference` / `UnknownEnumValue` - If a tag or value is unknown;
///   nothing is changed
pub fn apply_enum_descriptions(
    enums: &mut RecordTable,
    overrides: &[EnumDescriptionOverride],
) -> Result<usize> {
    let planned = overrides
        .iter()
        .map(|entry| {
            find_enum_row(enums, "enum descriptions", &entry.tag, &entry.value)
                .map(|index| (entry, index))
        })
        .collect::<Result<Vec<_>>>()?;

    for (entry, index) in &planned {
        if let Some(row) = enums.get_mut(&entry.tag).and_then(|rows| rows.get_mut(*index)) {
            row.insert(attrs::DESCRIPTION.to_string(), entry.description.clone());
        }
    }
    Ok(planned.len())
}
