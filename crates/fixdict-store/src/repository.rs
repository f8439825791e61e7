//! Repository loader
//!
//! A repository directory holds one sub-directory per catalog label, each with
//! one YAML file per table:
//!
//! ```text
//! repo/
//!   FIX.4.0/Fields.yaml Enums.yaml MsgType.yaml Components.yaml MsgContents.yaml Datatypes.yaml
//!   FIX.4.1/...
//! ```
//!
//! A version without a directory stays unloaded; a missing table file loads
//! as an empty table.

use crate::errors::{not_found, Result};
use crate::table::parse_table_file;
use fixdict_core::model::TableKind;
use fixdict_core::{log_op_end, log_op_error, log_op_start};
use fixdict_core::{VersionCatalog, VersionSnapshot, VersionedDictionary};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name of a table inside a version directory
pub fn table_file_name(kind: TableKind) -> String {
    format!("{}.yaml", kind.name())
}

/// Directory of one version inside a repository
pub fn version_dir(root: &Path, label: &str) -> PathBuf {
    root.join(label)
}

/// Load every table of one version directory
pub fn load_version(dir: &Path) -> Result<VersionSnapshot> {
    let mut snapshot = VersionSnapshot::new();
    for kind in TableKind::ALL {
        let path = dir.join(table_file_name(kind));
        if path.is_file() {
            *snapshot.table_mut(kind) = parse_table_file(kind, &path)?;
        } else {
            tracing::debug!(path = %path.display(), "table file absent, using empty table");
        }
    }
    Ok(snapshot)
}

/// Load all catalog versions found under `root`
///
/// # Errors
///
/// `NotFound` if `root` is not a directory; table parse errors carry the
/// failing version label.
pub fn load_repository(root: &Path, catalog: &VersionCatalog) -> Result<VersionedDictionary> {
    log_op_start!("load_repository", root = %root.display());
    let start = Instant::now();

    let result = load_versions(root, catalog);
    match &result {
        Ok(dict) => {
            log_op_end!(
                "load_repository",
                duration_ms = start.elapsed().as_millis() as u64,
                versions_loaded = dict.snapshots().count()
            );
        }
        Err(e) => {
            log_op_error!(
                "load_repository",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn load_versions(root: &Path, catalog: &VersionCatalog) -> Result<VersionedDictionary> {
    if !root.is_dir() {
        return Err(not_found("load_repository", root));
    }

    let mut dict = VersionedDictionary::new(catalog.clone());
    for ordinal in catalog.ordinals() {
        let label = catalog.label(ordinal);
        let dir = version_dir(root, label);
        if !dir.is_dir() {
            tracing::info!(version = label, "no directory for version, leaving it unloaded");
            continue;
        }
        let snapshot = load_version(&dir).map_err(|e| e.with_version(label))?;
        dict.insert_snapshot(ordinal, snapshot)?;
    }
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_file_names() {
        assert_eq!(table_file_name(TableKind::Messages), "MsgType.yaml");
        assert_eq!(table_file_name(TableKind::Segments), "MsgContents.yaml");
    }
}
