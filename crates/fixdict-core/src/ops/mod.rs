//! Pipeline stages that annotate the newest version's tables

pub mod enum_ops;
pub mod field_ops;
pub mod segment_ops;
pub mod span_ops;

pub use enum_ops::derive_enums;
pub use field_ops::{derive_fields, tidy_field_names, FieldNameIndex};
pub use segment_ops::{check_segment_references, sort_segments};
pub use span_ops::annotate_spans;
