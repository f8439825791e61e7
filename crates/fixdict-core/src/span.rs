//! Version-span builder
//!
//! A span has one slot per catalog version. A slot is `None` when the entity
//! has no content at that version, otherwise the ordinal at which the content
//! in effect there was last changed.

use crate::catalog::{VersionCatalog, VersionOrdinal};
use crate::diff::{compare_segments, contents_at, previous_contents, SegmentComparison};
use crate::errors::Result;
use crate::model::{ContainerKind, VersionedDictionary};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionSpan {
    slots: Vec<Option<VersionOrdinal>>,
}

impl VersionSpan {
    pub fn from_slots(slots: Vec<Option<VersionOrdinal>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<VersionOrdinal>] {
        &self.slots
    }

    pub fn slot(&self, ordinal: VersionOrdinal) -> Option<VersionOrdinal> {
        self.slots.get(ordinal.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// FromVersion: first version with content
    pub fn first_present(&self) -> Option<VersionOrdinal> {
        self.slots
            .iter()
            .position(Option::is_some)
            .map(VersionOrdinal::new)
    }

    /// ToVersion: last version with content
    pub fn last_present(&self) -> Option<VersionOrdinal> {
        self.slots
            .iter()
            .rposition(Option::is_some)
            .map(VersionOrdinal::new)
    }

    /// Version in which the newest content was introduced
    pub fn last_changed(&self) -> Option<VersionOrdinal> {
        self.slots.iter().rev().find_map(|slot| *slot)
    }

    /// Version after ToVersion, when ToVersion precedes the newest version
    pub fn deprecated_in(&self, catalog: &VersionCatalog) -> Option<VersionOrdinal> {
        let last = self.last_present()?;
        (last < catalog.latest()).then(|| last.next())
    }
}

/// Walk the catalog oldest to newest and record where content changed
pub fn build_span(dict: &VersionedDictionary, kind: ContainerKind, key: &str) -> VersionSpan {
    let mut current: Option<VersionOrdinal> = None;
    let mut slots = Vec::with_capacity(dict.catalog().len());

    for ordinal in dict.catalog().ordinals() {
        let comparison = compare_segments(
            contents_at(dict, kind, key, ordinal),
            previous_contents(dict, kind, key, ordinal),
        );
        let slot = match comparison {
            SegmentComparison::MissingCurrent => None,
            SegmentComparison::Equal => current,
            changed => {
                tracing::trace!(
                    kind = kind.as_str(),
                    key,
                    version = dict.catalog().label(ordinal),
                    reason = %changed,
                    "content changed"
                );
                current = Some(ordinal);
                current
            }
        };
        slots.push(slot);
    }

    VersionSpan { slots }
}

/// Spans for every message or component of the newest version
pub fn build_spans(
    dict: &VersionedDictionary,
    kind: ContainerKind,
) -> Result<BTreeMap<String, VersionSpan>> {
    let latest = dict.latest()?;
    Ok(latest
        .table(kind.table())
        .keys()
        .map(|key| (key.clone(), build_span(dict, kind, key)))
        .collect())
}
