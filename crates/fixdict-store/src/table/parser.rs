//! Table parser with validation
//!
//! Parses YAML and validates schema version, key presence and key uniqueness

use crate::errors::{io_error, serialization_error, table_validation, Result};
use crate::table::format_v0::{RawRow, TableFileV0};
use fixdict_core::model::TableKind;
use fixdict_core::{AttributeBag, RecordTable};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const SUPPORTED_SCHEMA_VERSION: u32 = 0;

/// Parse a table file from a path
pub fn parse_table_file(kind: TableKind, path: &Path) -> Result<RecordTable> {
    let content = fs::read_to_string(path).map_err(|e| io_error("table_read", path, e))?;
    parse_table_str(kind, &content)
        .map_err(|e| e.with_entity_id(path.display().to_string()))
}

/// Parse a table from a string
///
/// Rows are indexed by the table's key attribute. Strings are kept as
/// written and integers are stringified. Any other value is rejected: YAML
/// reads `2.10` as the float 2.1, so dotted positions must be quoted.
pub fn parse_table_str(kind: TableKind, content: &str) -> Result<RecordTable> {
    let rows: Vec<RawRow> = read_rows_str(kind.name(), content)?;
    let key_attribute = kind.key_attribute();
    let mut table = RecordTable::new();

    for (index, raw) in rows.into_iter().enumerate() {
        let row = to_attribute_bag(kind.name(), index, raw)?;
        let key = row.get(key_attribute).cloned().ok_or_else(|| {
            table_validation(
                kind.name(),
                &format!("Row {} has no {} attribute", index, key_attribute),
            )
        })?;
        if !kind.is_multi_valued() && table.contains_key(&key) {
            return Err(table_validation(
                kind.name(),
                &format!("Duplicate key {} in single-valued table", key),
            ));
        }
        table.push(key, row);
    }

    Ok(table)
}

/// Read the typed rows of any v0 file
pub fn read_rows_file<R: DeserializeOwned>(name: &str, path: &Path) -> Result<Vec<R>> {
    let content = fs::read_to_string(path).map_err(|e| io_error("table_read", path, e))?;
    read_rows_str(name, &content).map_err(|e| e.with_entity_id(path.display().to_string()))
}

/// Read the typed rows of a v0 document
pub fn read_rows_str<R: DeserializeOwned>(name: &str, content: &str) -> Result<Vec<R>> {
    let file: TableFileV0<R> = serde_yaml::from_str(content)
        .map_err(|e| serialization_error("table_parse", Path::new(name), e))?;

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(table_validation(
            name,
            &format!(
                "Unsupported schema_version: {}. Expected {}",
                file.schema_version, SUPPORTED_SCHEMA_VERSION
            ),
        ));
    }

    Ok(file.rows)
}

fn to_attribute_bag(table: &str, index: usize, raw: RawRow) -> Result<AttributeBag> {
    let mut row = AttributeBag::new();
    for (attribute, value) in raw {
        let rejected = |what: &str| {
            table_validation(
                table,
                &format!(
                    "Row {} attribute {} is {}; quote the value",
                    index, attribute, what
                ),
            )
        };
        let text = match value {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            serde_yaml::Value::Number(n) => return Err(rejected(&format!("the float {}", n))),
            serde_yaml::Value::Null => return Err(rejected("null")),
            serde_yaml::Value::Bool(b) => return Err(rejected(&format!("the boolean {}", b))),
            _ => return Err(rejected("not a scalar")),
        };
        row.insert(attribute, text);
    }
    Ok(row)
}
