//! Error handling for fixdict-store
//!
//! Wraps fixdict-core ExError with loader-specific helpers

use fixdict_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a table validation error
pub fn table_validation(table: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidTable)
        .with_op("table_parse")
        .with_entity_id(table.to_string())
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a YAML or TOML decoding error
pub fn serialization_error(operation: &str, path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(format!("{}: {}", path.display(), reason))
}

/// Create a missing-directory error
pub fn not_found(operation: &str, path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(operation.to_string())
        .with_message(format!("{} does not exist", path.display()))
}
