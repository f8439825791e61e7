//! Containment indexer
//!
//! Reverse lookup from a field tag or component name to the display names of
//! every message and component whose segment references it in any version.
//! Version information is collapsed.

use crate::errors::Result;
use crate::model::{attrs, record::required_attr, ContainerKind, VersionedDictionary};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContainmentIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ContainmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `container` references `reference`
    pub fn add(&mut self, reference: impl Into<String>, container: impl Into<String>) {
        self.entries
            .entry(reference.into())
            .or_default()
            .insert(container.into());
    }

    /// Containers of a field tag or component name; `None` if nothing references it
    pub fn containers_of(&self, reference: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Index every newest-version container of one kind across all versions
    ///
    /// Segments are read as recorded in each version; diff aliases do not
    /// apply here.
    pub fn index_containers(&mut self, dict: &VersionedDictionary, kind: ContainerKind) -> Result<()> {
        let latest = dict.latest()?;
        let table = latest.table(kind.table());

        for (key, rows) in table.iter() {
            let display = match (kind, rows.first()) {
                (ContainerKind::Message, Some(row)) => {
                    required_attr(row, kind.table().name(), key, attrs::MESSAGE_NAME)?.to_string()
                }
                _ => key.clone(),
            };

            for ordinal in dict.catalog().ordinals() {
                let Some(segment) = dict.segment(kind, key, ordinal) else {
                    continue;
                };
                for row in segment {
                    if let Some(reference) = row.get(attrs::TAG_TEXT) {
                        self.add(reference.clone(), display.clone());
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the full index: messages, then components
    pub fn build(dict: &VersionedDictionary) -> Result<Self> {
        Self::build_in_order(dict, &[ContainerKind::Message, ContainerKind::Component])
    }

    /// Build the index visiting container kinds in the given order
    pub fn build_in_order(dict: &VersionedDictionary, order: &[ContainerKind]) -> Result<Self> {
        let mut index = Self::new();
        for kind in order {
            index.index_containers(dict, *kind)?;
        }
        Ok(index)
    }
}
