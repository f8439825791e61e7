//! Attribute names used in the record tables
//!
//! The repository keeps every value as a string under one of these names.
//! Derived attributes are written back under the same vocabulary so the
//! consolidated tables look like the source tables to a renderer.

// Fields
pub const TAG: &str = "Tag";
pub const FIELD_NAME: &str = "FieldName";
pub const TYPE: &str = "Type";
pub const USES_ENUMS_FROM_TAG: &str = "UsesEnumsFromTag";

// Enumerated values
pub const ENUM: &str = "Enum";
pub const ENUM_NAME: &str = "EnumName";
pub const DESCRIPTION: &str = "Description";

// Messages and components
pub const MSG_TYPE: &str = "MsgType";
pub const MESSAGE_NAME: &str = "MessageName";
pub const COMPONENT_NAME: &str = "ComponentName";
pub const MSG_ID: &str = "MsgID";
pub const DESC: &str = "Desc";

// Segment rows
pub const TAG_TEXT: &str = "TagText";
pub const POSITION: &str = "Position";
pub const REQD: &str = "Reqd";
pub const INDENT: &str = "Indent";

// Data types
pub const TYPE_NAME: &str = "TypeName";

// Derived
pub const FROM_VERSION: &str = "FromVersion";
pub const DEPRECATED: &str = "Deprecated";
