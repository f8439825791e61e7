//! FixDict Core - cross-version protocol dictionary consolidation
//!
//! This crate turns per-version snapshots of a FIX-style message dictionary
//! into one consolidated dictionary in the newest version's tables,
//! including:
//! - Version catalog with max-tag watermarks and diff aliases
//! - Enum name synthesis and naming checks
//! - Field and enum value introduction versions
//! - Segment comparison and per-version change spans
//! - Containment index from fields and components to their containers
//! - Externally curated name, description and glossary overrides
//!
//! Loading snapshots from disk lives in `fixdict-store`.

pub mod catalog;
pub mod config;
pub mod consolidate;
pub mod containment;
pub mod diff;
pub mod errors;
pub mod introduction;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod ops;
pub mod overrides;
pub mod report;
pub mod span;

// Re-export commonly used types
pub use catalog::{VersionCatalog, VersionInfo, VersionOrdinal};
pub use config::{ConsolidationConfig, FieldIntroduction};
pub use consolidate::{ConsolidatedDictionary, ConsolidatedOutput, Consolidator};
pub use containment::ContainmentIndex;
pub use errors::{DictError, ExError, ExErrorKind, Result};
pub use model::{
    AttributeBag, ContainerKind, RecordTable, TableKind, VersionSnapshot, VersionedDictionary,
};
pub use overrides::OverrideSet;
pub use report::{ConsolidationReport, DataQualityWarning, WarningKind};
pub use span::VersionSpan;
