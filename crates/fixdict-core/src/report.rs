//! Consolidation diagnostics
//!
//! Data-quality findings never stop a run. Each one is logged as it is found
//! and kept, in order, on the [`ConsolidationReport`] returned with the
//! consolidated dictionary.

use crate::normalize::NameLengthTally;
use fixdict_core_types::schema::EVENT_DATA_QUALITY;
use fixdict_core_types::RunId;
use serde::Serialize;

/// Category of a data-quality warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Two names of one tag share their leading characters
    SimilarEnumName,
    ShortEnumName,
    NumericEnumName,
    LongEnumName,
    /// Description produced no usable name
    EmptyEnumName,
    FunnyFieldName,
    /// Deprecation marker repaired to a catalog label
    MalformedDeprecation,
    /// Explicit Deprecated marker disagreed with the computed version
    StaleDeprecation,
    /// Deprecated marker added where none was present
    MissingDeprecation,
    /// Message or component has no segment in any version
    NoSegmentContents,
    /// Segment row names neither a field tag nor a component
    UnresolvedSegmentReference,
    /// Override category skipped because its input was absent
    MissingOverrideResource,
    UnknownGlossaryField,
    UnknownGlossaryValue,
    /// Glossary text replaced a longer description
    ShorterGlossaryDescription,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningKind::SimilarEnumName => "similar_enum_name",
            WarningKind::ShortEnumName => "short_enum_name",
            WarningKind::NumericEnumName => "numeric_enum_name",
            WarningKind::LongEnumName => "long_enum_name",
            WarningKind::EmptyEnumName => "empty_enum_name",
            WarningKind::FunnyFieldName => "funny_field_name",
            WarningKind::MalformedDeprecation => "malformed_deprecation",
            WarningKind::StaleDeprecation => "stale_deprecation",
            WarningKind::MissingDeprecation => "missing_deprecation",
            WarningKind::NoSegmentContents => "no_segment_contents",
            WarningKind::UnresolvedSegmentReference => "unresolved_segment_reference",
            WarningKind::MissingOverrideResource => "missing_override_resource",
            WarningKind::UnknownGlossaryField => "unknown_glossary_field",
            WarningKind::UnknownGlossaryValue => "unknown_glossary_value",
            WarningKind::ShorterGlossaryDescription => "shorter_glossary_description",
        }
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataQualityWarning {
    pub kind: WarningKind,
    /// Entity the warning is about, e.g. `tag 54 enum 1` or `message D`
    pub subject: String,
    pub message: String,
}

/// Informational note (skipped placeholders and the like)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoNote {
    pub subject: String,
    pub message: String,
}

/// How many override records were applied, per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverrideCounts {
    pub enum_names: usize,
    pub message_descriptions: usize,
    pub component_descriptions: usize,
    pub enum_descriptions: usize,
    pub glossary_applied: usize,
    pub glossary_skipped: usize,
}

/// Everything a run noticed besides its result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsolidationReport {
    pub run_id: Option<RunId>,
    pub warnings: Vec<DataQualityWarning>,
    pub notes: Vec<InfoNote>,
    pub name_lengths: NameLengthTally,
    pub overrides: OverrideCounts,
}

impl ConsolidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_run(run_id: RunId) -> Self {
        Self {
            run_id: Some(run_id),
            ..Self::default()
        }
    }

    /// Record and log a warning
    pub fn warn(&mut self, kind: WarningKind, subject: impl Into<String>, message: impl Into<String>) {
        let warning = DataQualityWarning {
            kind,
            subject: subject.into(),
            message: message.into(),
        };
        tracing::warn!(
            component = module_path!(),
            event = EVENT_DATA_QUALITY,
            warning_kind = kind.as_str(),
            subject = warning.subject.as_str(),
            run_id = self.run_id.as_ref().map(RunId::as_str),
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }

    /// Record and log an informational note
    pub fn note(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let note = InfoNote {
            subject: subject.into(),
            message: message.into(),
        };
        tracing::info!(
            component = module_path!(),
            subject = %note.subject,
            "{}",
            note.message
        );
        self.notes.push(note);
    }

    /// Number of warnings of one kind
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &DataQualityWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
