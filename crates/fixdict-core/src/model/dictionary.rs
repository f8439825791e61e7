use super::record::AttributeBag;
use super::snapshot::{ContainerKind, VersionSnapshot};
use crate::catalog::{VersionCatalog, VersionOrdinal};
use crate::errors::{DictError, Result};

/// Ordered per-version snapshots, one slot per catalog version
///
/// A slot is `None` when the repository has no directory for that version.
/// The newest slot must be filled before consolidation.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedDictionary {
    catalog: VersionCatalog,
    snapshots: Vec<Option<VersionSnapshot>>,
}

impl VersionedDictionary {
    pub fn new(catalog: VersionCatalog) -> Self {
        let snapshots = vec![None; catalog.len()];
        Self { catalog, snapshots }
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// Store the snapshot for a version, replacing any previous one
    pub fn insert_snapshot(
        &mut self,
        ordinal: VersionOrdinal,
        snapshot: VersionSnapshot,
    ) -> Result<()> {
        let slot = self
            .snapshots
            .get_mut(ordinal.index())
            .ok_or_else(|| DictError::UnknownVersion {
                label: ordinal.to_string(),
            })?;
        *slot = Some(snapshot);
        Ok(())
    }

    pub fn snapshot(&self, ordinal: VersionOrdinal) -> Option<&VersionSnapshot> {
        self.snapshots.get(ordinal.index()).and_then(Option::as_ref)
    }

    pub fn snapshot_mut(&mut self, ordinal: VersionOrdinal) -> Option<&mut VersionSnapshot> {
        self.snapshots
            .get_mut(ordinal.index())
            .and_then(Option::as_mut)
    }

    /// Loaded snapshots with their ordinals, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = (VersionOrdinal, &VersionSnapshot)> {
        self.snapshots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (VersionOrdinal::new(i), s)))
    }

    pub fn snapshots_mut(&mut self) -> impl Iterator<Item = (VersionOrdinal, &mut VersionSnapshot)> {
        self.snapshots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|s| (VersionOrdinal::new(i), s)))
    }

    /// Snapshot of the newest catalog version
    ///
    /// # Errors
    ///
    /// `MissingLatestSnapshot` if that version was never loaded.
    pub fn latest(&self) -> Result<&VersionSnapshot> {
        let latest = self.catalog.latest();
        self.snapshot(latest)
            .ok_or_else(|| DictError::MissingLatestSnapshot {
                label: self.catalog.label(latest).to_string(),
            })
    }

    pub fn latest_mut(&mut self) -> Result<&mut VersionSnapshot> {
        let latest = self.catalog.latest();
        let label = self.catalog.label(latest).to_string();
        self.snapshot_mut(latest)
            .ok_or(DictError::MissingLatestSnapshot { label })
    }

    /// Move the newest snapshot out, leaving its slot empty
    pub fn take_latest(&mut self) -> Result<VersionSnapshot> {
        let latest = self.catalog.latest();
        let label = self.catalog.label(latest).to_string();
        self.snapshots
            .get_mut(latest.index())
            .and_then(Option::take)
            .ok_or(DictError::MissingLatestSnapshot { label })
    }

    /// Segment rows of a container as recorded in one version (no aliasing)
    pub fn segment(
        &self,
        kind: ContainerKind,
        key: &str,
        ordinal: VersionOrdinal,
    ) -> Option<&[AttributeBag]> {
        self.snapshot(ordinal)?.segment(kind, key)
    }
}
