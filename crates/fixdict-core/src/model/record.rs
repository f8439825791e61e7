use crate::errors::{DictError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a record table: attribute name to string value
pub type AttributeBag = BTreeMap<String, String>;

/// A keyed table of attribute bags
///
/// Keys are the table's natural key in string form (tag, message type,
/// component name, MsgID, type name). Single-valued tables hold one bag per
/// key; the enum and segment tables hold an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    rows: BTreeMap<String, Vec<AttributeBag>>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row under `key`, keeping insertion order within the key
    pub fn push(&mut self, key: impl Into<String>, row: AttributeBag) {
        self.rows.entry(key.into()).or_default().push(row);
    }

    pub fn get(&self, key: &str) -> Option<&[AttributeBag]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Vec<AttributeBag>> {
        self.rows.get_mut(key)
    }

    /// First row under `key` (the only one for single-valued tables)
    pub fn first(&self, key: &str) -> Option<&AttributeBag> {
        self.rows.get(key).and_then(|rows| rows.first())
    }

    pub fn first_mut(&mut self, key: &str) -> Option<&mut AttributeBag> {
        self.rows.get_mut(key).and_then(|rows| rows.first_mut())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.rows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<AttributeBag>)> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Vec<AttributeBag>)> {
        self.rows.iter_mut()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Vec<AttributeBag>> {
        self.rows.values_mut()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of rows across every key
    pub fn row_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, AttributeBag)> for RecordTable {
    fn from_iter<I: IntoIterator<Item = (String, AttributeBag)>>(iter: I) -> Self {
        let mut table = RecordTable::new();
        for (key, row) in iter {
            table.push(key, row);
        }
        table
    }
}

/// Build an attribute bag from name/value pairs
pub fn bag<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> AttributeBag {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse a tag key or tag attribute
///
/// # Errors
///
/// `MalformedTag` unless `value` is a non-negative integer.
pub fn parse_tag(table: &str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| DictError::MalformedTag {
        table: table.to_string(),
        value: value.to_string(),
    })
}

/// Read an attribute that the consolidation cannot do without
///
/// # Errors
///
/// `MissingAttribute` naming the table, key and attribute.
pub fn required_attr<'a>(
    row: &'a AttributeBag,
    table: &str,
    key: &str,
    attribute: &str,
) -> Result<&'a str> {
    row.get(attribute)
        .map(String::as_str)
        .ok_or_else(|| DictError::MissingAttribute {
            table: table.to_string(),
            key: key.to_string(),
            attribute: attribute.to_string(),
        })
}
