//! Override merger
//!
//! Externally supplied corrections applied to the newest version's tables:
//! enum display names, message / component / enum descriptions, and
//! glossary entries.
//!
//! Name and description overrides validate every record before touching a
//! table, so a rejected batch leaves the dictionary as it was. Glossary
//! entries never fail; unresolved ones become warnings.

pub mod descriptions;
pub mod glossary;
pub mod names;

use serde::{Deserialize, Serialize};

pub use descriptions::{
    apply_component_descriptions, apply_enum_descriptions, apply_message_descriptions,
};
pub use glossary::{apply_glossary, extract_field_name};
pub use names::apply_enum_names;

/// External display name for one enumerated value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumNameOverride {
    pub tag: String,
    pub value: String,
    pub name: String,
}

/// Replacement description for a message (keyed by MsgType) or component
/// (keyed by ComponentName)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionOverride {
    pub key: String,
    pub description: String,
}

/// Replacement description for one enumerated value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptionOverride {
    pub tag: String,
    pub value: String,
    pub description: String,
}

/// One tokenized glossary entry
///
/// `label` carries the field name in square brackets, e.g. `"Side [Side]"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub label: String,
    #[serde(default)]
    pub value_name: String,
    #[serde(default)]
    pub description: String,
}

/// Every override input of a run
///
/// `None` means the input was not supplied; that category is skipped with a
/// warning. `Some(vec![])` is an empty but present input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    pub enum_names: Option<Vec<EnumNameOverride>>,
    pub message_descriptions: Option<Vec<DescriptionOverride>>,
    pub component_descriptions: Option<Vec<DescriptionOverride>>,
    pub enum_descriptions: Option<Vec<EnumDescriptionOverride>>,
    pub glossary: Option<Vec<GlossaryEntry>>,
}

impl OverrideSet {
    /// All categories present and empty
    pub fn empty() -> Self {
        Self {
            enum_names: Some(Vec::new()),
            message_descriptions: Some(Vec::new()),
            component_descriptions: Some(Vec::new()),
            enum_descriptions: Some(Vec::new()),
            glossary: Some(Vec::new()),
        }
    }
}
