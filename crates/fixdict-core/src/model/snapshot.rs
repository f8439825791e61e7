use super::attrs;
use super::record::{AttributeBag, RecordTable};
use serde::{Deserialize, Serialize};

/// The six per-version tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableKind {
    Fields,
    Enums,
    Messages,
    Components,
    Segments,
    DataTypes,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Fields,
        TableKind::Enums,
        TableKind::Messages,
        TableKind::Components,
        TableKind::Segments,
        TableKind::DataTypes,
    ];

    /// Attribute that carries the table's natural key
    pub fn key_attribute(self) -> &'static str {
        match self {
            TableKind::Fields | TableKind::Enums => attrs::TAG,
            TableKind::Messages => attrs::MSG_TYPE,
            TableKind::Components => attrs::COMPONENT_NAME,
            TableKind::Segments => attrs::MSG_ID,
            TableKind::DataTypes => attrs::TYPE_NAME,
        }
    }

    /// Whether a key may hold several rows
    pub fn is_multi_valued(self) -> bool {
        matches!(self, TableKind::Enums | TableKind::Segments)
    }

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Fields => "Fields",
            TableKind::Enums => "Enums",
            TableKind::Messages => "MsgType",
            TableKind::Components => "Components",
            TableKind::Segments => "MsgContents",
            TableKind::DataTypes => "Datatypes",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entities whose structure is a segment: messages and components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Message,
    Component,
}

impl ContainerKind {
    pub fn table(self) -> TableKind {
        match self {
            ContainerKind::Message => TableKind::Messages,
            ContainerKind::Component => TableKind::Components,
        }
    }

    /// Attribute holding the name added to the containment index
    pub fn display_attribute(self) -> &'static str {
        match self {
            ContainerKind::Message => attrs::MESSAGE_NAME,
            ContainerKind::Component => attrs::COMPONENT_NAME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Message => "message",
            ContainerKind::Component => "component",
        }
    }
}

/// Every table of one protocol version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    pub fields: RecordTable,
    pub enums: RecordTable,
    pub messages: RecordTable,
    pub components: RecordTable,
    pub segments: RecordTable,
    pub data_types: RecordTable,
}

impl VersionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, kind: TableKind) -> &RecordTable {
        match kind {
            TableKind::Fields => &self.fields,
            TableKind::Enums => &self.enums,
            TableKind::Messages => &self.messages,
            TableKind::Components => &self.components,
            TableKind::Segments => &self.segments,
            TableKind::DataTypes => &self.data_types,
        }
    }

    pub fn table_mut(&mut self, kind: TableKind) -> &mut RecordTable {
        match kind {
            TableKind::Fields => &mut self.fields,
            TableKind::Enums => &mut self.enums,
            TableKind::Messages => &mut self.messages,
            TableKind::Components => &mut self.components,
            TableKind::Segments => &mut self.segments,
            TableKind::DataTypes => &mut self.data_types,
        }
    }

    /// Segment rows of a message or component in this version
    ///
    /// Follows the container's `MsgID` into the segment table. `None` when the
    /// container, its `MsgID`, or the segment is missing.
    pub fn segment(&self, kind: ContainerKind, key: &str) -> Option<&[AttributeBag]> {
        let msg_id = self.table(kind.table()).first(key)?.get(attrs::MSG_ID)?;
        self.segments.get(msg_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::bag;

    #[test]
    fn test_segment_follows_msg_id() {
        let mut snap = VersionSnapshot::new();
        snap.messages
            .push("D", bag([("MsgType", "D"), ("MsgID", "14")]));
        snap.segments
            .push("14", bag([("MsgID", "14"), ("TagText", "11"), ("Position", "1")]));

        let rows = snap.segment(ContainerKind::Message, "D").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["TagText"], "11");

        assert!(snap.segment(ContainerKind::Message, "8").is_none());
        assert!(snap.segment(ContainerKind::Component, "D").is_none());
    }

    #[test]
    fn test_segment_missing_contents_is_none() {
        let mut snap = VersionSnapshot::new();
        snap.components
            .push("Instrument", bag([("ComponentName", "Instrument"), ("MsgID", "1003")]));
        assert!(snap.segment(ContainerKind::Component, "Instrument").is_none());
    }

    #[test]
    fn test_table_kind_shape() {
        assert!(TableKind::Enums.is_multi_valued());
        assert!(TableKind::Segments.is_multi_valued());
        assert!(!TableKind::Fields.is_multi_valued());
        assert_eq!(TableKind::Components.key_attribute(), "ComponentName");
        assert_eq!(TableKind::Segments.name(), "MsgContents");
    }
}
