//! Configuration file loading

use crate::errors::{io_error, Result};
use fixdict_core::{ConsolidationConfig, ExError};
use std::fs;
use std::path::Path;

/// Read and validate a TOML configuration file
///
/// A rejected file keeps its kind (`InvalidConfig` or `InvalidCatalog`); the
/// decoding or validation error is chained as the source.
pub fn load_config(path: &Path) -> Result<ConsolidationConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
    ConsolidationConfig::from_toml_str(&content).map_err(|e| {
        let cause = ExError::from(e);
        ExError::new(cause.kind())
            .with_op("load_config")
            .with_entity_id(path.display().to_string())
            .with_message("Configuration rejected")
            .with_source(cause)
    })
}
