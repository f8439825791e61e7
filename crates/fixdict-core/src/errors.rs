use fixdict_core_types::RunId;
use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// raised while loading and consolidating protocol dictionaries. Each kind maps
/// to a stable error code that can be used for programmatic error handling,
/// testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input shape
    /// A natural key that must be numeric (a tag) is not
    MalformedKey,
    /// A table row is missing an attribute the consolidation needs
    MissingAttribute,
    /// A single-valued table holds more than one row for a key
    InvalidTable,

    // Lookup
    NotFound,
    /// An override or cross reference names an entity that does not exist
    UnknownReference,
    /// An externally supplied name collides with an existing one
    DuplicateName,

    // Catalog / configuration
    InvalidCatalog,
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedKey => "ERR_MALFORMED_KEY",
            ExErrorKind::MissingAttribute => "ERR_MISSING_ATTRIBUTE",
            ExErrorKind::InvalidTable => "ERR_INVALID_TABLE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownReference => "ERR_UNKNOWN_REFERENCE",
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::InvalidCatalog => "ERR_INVALID_CATALOG",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    version: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            version: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (tag, message type, component name, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add protocol version context
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Tag the error with the consolidation run it aborted
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Chain the lower-level error this one wraps
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the protocol version context, if any
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(version) = &self.version {
            write!(f, " (version: {})", version)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for dictionary consolidation
///
/// Every variant is fatal: it aborts the consolidation run. Data-quality
/// anomalies are not errors; they are collected in the
/// [`ConsolidationReport`](crate::report::ConsolidationReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DictError {
    // ===== Malformed keys =====
    /// A tag key or tag attribute is not a non-negative integer
    #[error("Malformed tag '{value}' in {table}")]
    MalformedTag { table: String, value: String },

    // ===== Table shape =====
    /// A row lacks an attribute the consolidation depends on
    #[error("{table} row '{key}' is missing attribute {attribute}")]
    MissingAttribute {
        table: String,
        key: String,
        attribute: String,
    },

    /// A single-valued table holds several rows for one key
    #[error("{table} key '{key}' has {count} rows, expected exactly one")]
    MultipleRows {
        table: String,
        key: String,
        count: usize,
    },

    // ===== Catalog =====
    /// Catalog definition is inconsistent
    #[error("Invalid version catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Label does not name any catalog version
    #[error("Unrecognized protocol version: {label}")]
    UnknownVersion { label: String },

    /// Tag is above every version watermark
    #[error("Unrecognized tag {tag}: beyond every catalog watermark")]
    TagBeyondCatalog { tag: u32 },

    /// The newest catalog version has no loaded snapshot
    #[error("No snapshot loaded for latest version {label}")]
    MissingLatestSnapshot { label: String },

    // ===== Unknown references =====
    /// Override or cross reference names an unknown entity
    #[error("Unknown {entity} in {context}: {key}")]
    UnknownReference {
        context: String,
        entity: String,
        key: String,
    },

    /// Override names an enum value the tag does not have
    #[error("Unknown enum of tag {tag} in {context}: {value}")]
    UnknownEnumValue {
        context: String,
        tag: String,
        value: String,
    },

    // ===== Duplicates =====
    /// External name targets a value that already carries a name
    #[error("Duplicate name for enum of tag {tag} in {context}: {value}")]
    DuplicateEnumName {
        context: String,
        tag: String,
        value: String,
    },

    // ===== Configuration =====
    /// Configuration could not be parsed or is out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Output =====
    /// Consolidated output could not be encoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from DictError to ExError
///
/// Lets the loader and CLI speak the canonical facility while the core keeps
/// its precise domain variants.
impl From<DictError> for ExError {
    fn from(err: DictError) -> Self {
        match err {
            DictError::MalformedTag { table, value } => ExError::new(ExErrorKind::MalformedKey)
                .with_entity_id(value)
                .with_message(format!("Tag is not a non-negative integer in {}", table)),

            DictError::MissingAttribute {
                table,
                key,
                attribute,
            } => ExError::new(ExErrorKind::MissingAttribute)
                .with_entity_id(key)
                .with_message(format!("{} row is missing attribute {}", table, attribute)),

            DictError::MultipleRows { table, key, count } => {
                ExError::new(ExErrorKind::InvalidTable)
                    .with_entity_id(key)
                    .with_message(format!("{} has {} rows for a single-valued key", table, count))
            }

            DictError::InvalidCatalog { reason } => ExError::new(ExErrorKind::InvalidCatalog)
                .with_message(format!("Invalid version catalog: {}", reason)),

            DictError::UnknownVersion { label } => ExError::new(ExErrorKind::NotFound)
                .with_version(label)
                .with_message("Unrecognized protocol version"),

            DictError::TagBeyondCatalog { tag } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(tag.to_string())
                .with_op("field_introduced")
                .with_message("Tag exceeds every catalog watermark"),

            DictError::MissingLatestSnapshot { label } => ExError::new(ExErrorKind::NotFound)
                .with_version(label)
                .with_message("Latest version has no loaded snapshot"),

            DictError::UnknownReference {
                context,
                entity,
                key,
            } => ExError::new(ExErrorKind::UnknownReference)
                .with_entity_id(key)
                .with_message(format!("Unknown {} in {}", entity, context)),

            DictError::UnknownEnumValue {
                context,
                tag,
                value,
            } => ExError::new(ExErrorKind::UnknownReference)
                .with_entity_id(tag)
                .with_message(format!("Unknown enum value {} in {}", value, context)),

            DictError::DuplicateEnumName {
                context,
                tag,
                value,
            } => ExError::new(ExErrorKind::DuplicateName)
                .with_entity_id(tag)
                .with_message(format!("Enum value {} already named ({})", value, context)),

            DictError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            DictError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DictError
impl From<serde_json::Error> for DictError {
    fn from(err: serde_json::Error) -> Self {
        DictError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from toml::de::Error to DictError
impl From<toml::de::Error> for DictError {
    fn from(err: toml::de::Error) -> Self {
        DictError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::MalformedKey, "ERR_MALFORMED_KEY"),
            (ExErrorKind::UnknownReference, "ERR_UNKNOWN_REFERENCE"),
            (ExErrorKind::DuplicateName, "ERR_DUPLICATE_NAME"),
            (ExErrorKind::InvalidTable, "ERR_INVALID_TABLE"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::UnknownReference)
            .with_op("apply_message_descriptions")
            .with_entity_id("ZZ")
            .with_message("Unknown message type");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_UNKNOWN_REFERENCE]"));
        assert!(text.contains("apply_message_descriptions"));
        assert!(text.contains("ZZ"));
    }

    #[test]
    fn test_run_id_none_by_default() {
        let err = ExError::new(ExErrorKind::Io);
        assert!(err.run_id().is_none());
        assert!(err.source_error().is_none());
    }
}
