//! Override directory loader
//!
//! Override files use the same v0 envelope as table files, with typed rows:
//!
//! | File                | Row fields                    |
//! |---------------------|-------------------------------|
//! | `EnumName.yaml`     | `tag`, `value`, `name`        |
//! | `MessageDesc.yaml`  | `key`, `description`          |
//! | `ComponentDesc.yaml`| `key`, `description`          |
//! | `EnumDesc.yaml`     | `tag`, `value`, `description` |
//! | `Glossary.yaml`     | `label`, `value_name`, `description` |
//!
//! A missing file leaves its category unset so the consolidation skips it.

use crate::errors::{not_found, Result};
use crate::table::read_rows_file;
use fixdict_core::OverrideSet;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const ENUM_NAME_FILE: &str = "EnumName.yaml";
pub const MESSAGE_DESC_FILE: &str = "MessageDesc.yaml";
pub const COMPONENT_DESC_FILE: &str = "ComponentDesc.yaml";
pub const ENUM_DESC_FILE: &str = "EnumDesc.yaml";
pub const GLOSSARY_FILE: &str = "Glossary.yaml";

fn load_optional<R: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<Vec<R>>> {
    let path = dir.join(file);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "override file absent");
        return Ok(None);
    }
    read_rows_file(file, &path).map(Some)
}

/// Load every override category found in `dir`
///
/// # Errors
///
/// `NotFound` if `dir` is not a directory; parse errors name the file.
pub fn load_overrides(dir: &Path) -> Result<OverrideSet> {
    if !dir.is_dir() {
        return Err(not_found("load_overrides", dir));
    }

    Ok(OverrideSet {
        enum_names: load_optional(dir, ENUM_NAME_FILE)?,
        message_descriptions: load_optional(dir, MESSAGE_DESC_FILE)?,
        component_descriptions: load_optional(dir, COMPONENT_DESC_FILE)?,
        enum_descriptions: load_optional(dir, ENUM_DESC_FILE)?,
        glossary: load_optional(dir, GLOSSARY_FILE)?,
    })
}
