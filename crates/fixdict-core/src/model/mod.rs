//! Per-version record tables
//!
//! Every table maps a natural key to a list of string attribute bags. The
//! consolidation reads older snapshots and writes derived attributes only into
//! the newest one.

pub mod attrs;
pub mod dictionary;
pub mod record;
pub mod snapshot;

pub use dictionary::VersionedDictionary;
pub use record::{bag, AttributeBag, RecordTable};
pub use snapshot::{ContainerKind, TableKind, VersionSnapshot};
