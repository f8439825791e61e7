//! Table Format v0 schema
//!
//! Every table and override file is a YAML document:
//!
//! ```yaml
//! schema_version: 0
//! rows:
//!   - Tag: 54
//!     FieldName: Side
//!     Type: char
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One untyped row as written in a table file
pub type RawRow = BTreeMap<String, serde_yaml::Value>;

/// Top-level table file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFileV0<R> {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Rows in file order
    #[serde(default = "Vec::new")]
    pub rows: Vec<R>,
}
