//! Version catalog
//!
//! The ordered, immutable list of protocol versions a repository covers. Every
//! per-version table, span array and introduction lookup is indexed by a
//! [`VersionOrdinal`] issued by this catalog.
//!
//! The catalog also owns the diff alias table: a version listed there borrows
//! another version's content when segments are compared. The standard FIX
//! catalog uses it to make the transport-extension version (FIXT.1.1) read the
//! FIX.5.0 content, so the session-layer split does not look like a change.

use crate::errors::{DictError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of a version within its catalog (0 = oldest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionOrdinal(usize);

impl VersionOrdinal {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// The ordinal immediately before this one, or `None` for the oldest version
    pub fn previous(self) -> Option<VersionOrdinal> {
        self.0.checked_sub(1).map(VersionOrdinal)
    }

    pub fn next(self) -> VersionOrdinal {
        VersionOrdinal(self.0 + 1)
    }
}

impl std::fmt::Display for VersionOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One protocol version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Display label, also the repository directory name (e.g. "FIX.4.2")
    pub label: String,
    /// Short suffix (e.g. "4.2")
    pub suffix: String,
    /// Highest field tag defined by this version
    pub max_tag: u32,
}

impl VersionInfo {
    pub fn new(label: impl Into<String>, suffix: impl Into<String>, max_tag: u32) -> Self {
        Self {
            label: label.into(),
            suffix: suffix.into(),
            max_tag,
        }
    }
}

/// Ordered list of known protocol versions plus the diff alias table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCatalog {
    versions: Vec<VersionInfo>,
    diff_aliases: BTreeMap<VersionOrdinal, VersionOrdinal>,
}

impl VersionCatalog {
    /// Build a catalog, validating its shape
    ///
    /// # Errors
    ///
    /// `InvalidCatalog` if the list is empty, a label repeats (case-insensitive),
    /// watermarks decrease, or an alias is out of range, points forward, or
    /// chains onto another alias.
    pub fn new(
        versions: Vec<VersionInfo>,
        diff_aliases: BTreeMap<VersionOrdinal, VersionOrdinal>,
    ) -> Result<Self> {
        if versions.is_empty() {
            return Err(DictError::InvalidCatalog {
                reason: "catalog must list at least one version".to_string(),
            });
        }

        for (i, version) in versions.iter().enumerate() {
            if version.label.trim().is_empty() {
                return Err(DictError::InvalidCatalog {
                    reason: format!("version #{} has an empty label", i),
                });
            }
            if versions[..i]
                .iter()
                .any(|earlier| earlier.label.eq_ignore_ascii_case(&version.label))
            {
                return Err(DictError::InvalidCatalog {
                    reason: format!("duplicate version label {}", version.label),
                });
            }
            if i > 0 && version.max_tag < versions[i - 1].max_tag {
                return Err(DictError::InvalidCatalog {
                    reason: format!(
                        "watermark of {} ({}) is below its predecessor's ({})",
                        version.label,
                        version.max_tag,
                        versions[i - 1].max_tag
                    ),
                });
            }
        }

        for (from, to) in &diff_aliases {
            if from.index() >= versions.len() || to.index() >= versions.len() {
                return Err(DictError::InvalidCatalog {
                    reason: format!("diff alias {} -> {} is out of range", from, to),
                });
            }
            if to >= from {
                return Err(DictError::InvalidCatalog {
                    reason: format!("diff alias {} -> {} must point to an older version", from, to),
                });
            }
            if diff_aliases.contains_key(to) {
                return Err(DictError::InvalidCatalog {
                    reason: format!("diff alias {} -> {} targets another alias", from, to),
                });
            }
        }

        Ok(Self {
            versions,
            diff_aliases,
        })
    }

    /// The nine-version FIX catalog, FIX.4.0 through FIX.5.0SP2
    ///
    /// FIXT.1.1 is aliased to FIX.5.0 for diffing.
    pub fn fix_standard() -> Self {
        let versions = vec![
            VersionInfo::new("FIX.4.0", "4.0", 140),
            VersionInfo::new("FIX.4.1", "4.1", 211),
            VersionInfo::new("FIX.4.2", "4.2", 446),
            VersionInfo::new("FIX.4.3", "4.3", 659),
            VersionInfo::new("FIX.4.4", "4.4", 956),
            VersionInfo::new("FIX.5.0", "5.0", 1139),
            VersionInfo::new("FIXT.1.1", "T1.1", 1409),
            VersionInfo::new("FIX.5.0SP1", "5.0SP1", 1426),
            VersionInfo::new("FIX.5.0SP2", "5.0SP2", 1621),
        ];
        let mut diff_aliases = BTreeMap::new();
        diff_aliases.insert(VersionOrdinal(6), VersionOrdinal(5));
        Self {
            versions,
            diff_aliases,
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// All ordinals, oldest first
    pub fn ordinals(&self) -> impl Iterator<Item = VersionOrdinal> {
        (0..self.versions.len()).map(VersionOrdinal)
    }

    pub fn versions(&self) -> &[VersionInfo] {
        &self.versions
    }

    pub fn latest(&self) -> VersionOrdinal {
        VersionOrdinal(self.versions.len().saturating_sub(1))
    }

    pub fn contains(&self, ordinal: VersionOrdinal) -> bool {
        ordinal.index() < self.versions.len()
    }

    pub fn info(&self, ordinal: VersionOrdinal) -> Option<&VersionInfo> {
        self.versions.get(ordinal.index())
    }

    /// Display label of an ordinal; empty for an ordinal outside the catalog
    pub fn label(&self, ordinal: VersionOrdinal) -> &str {
        self.info(ordinal).map(|v| v.label.as_str()).unwrap_or("")
    }

    pub fn suffix(&self, ordinal: VersionOrdinal) -> &str {
        self.info(ordinal).map(|v| v.suffix.as_str()).unwrap_or("")
    }

    /// Look up a version by label, ignoring ASCII case
    pub fn ordinal_of(&self, label: &str) -> Option<VersionOrdinal> {
        self.versions
            .iter()
            .position(|v| v.label.eq_ignore_ascii_case(label))
            .map(VersionOrdinal)
    }

    /// Like [`ordinal_of`](Self::ordinal_of) but failing with `UnknownVersion`
    pub fn require(&self, label: &str) -> Result<VersionOrdinal> {
        self.ordinal_of(label)
            .ok_or_else(|| DictError::UnknownVersion {
                label: label.to_string(),
            })
    }

    /// First version whose watermark covers the tag
    pub fn tag_introduced(&self, tag: u32) -> Result<VersionOrdinal> {
        self.versions
            .iter()
            .position(|v| tag <= v.max_tag)
            .map(VersionOrdinal)
            .ok_or(DictError::TagBeyondCatalog { tag })
    }

    /// Ordinal whose content stands in for `ordinal` when diffing
    pub fn diff_target(&self, ordinal: VersionOrdinal) -> VersionOrdinal {
        self.diff_aliases.get(&ordinal).copied().unwrap_or(ordinal)
    }

    pub fn diff_aliases(&self) -> &BTreeMap<VersionOrdinal, VersionOrdinal> {
        &self.diff_aliases
    }
}

impl Default for VersionCatalog {
    fn default() -> Self {
        Self::fix_standard()
    }
}
