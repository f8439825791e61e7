//! Segment diff engine
//!
//! Decides whether a message's or component's composition changed between two
//! versions.
//!
//! ## Entry points
//!
//! - [`segments_equal`] / [`compare_segments`]: semantic equality of two
//!   ordered segment row lists, with the reason for any mismatch.
//! - [`contents_at`]: the segment rows in effect for a container at one
//!   version, after the catalog's diff aliases are applied.
//! - [`sort_segment_rows`]: structural ordering by `Position`, applied before
//!   any comparison.
//!
//! ## Equality rules
//!
//! - Absence on either side is never equal, even to an empty list.
//! - Rows are compared pairwise by position; each pair must carry the same
//!   number of attributes and agree on every attribute except `Description`
//!   and `MsgID`.

pub mod contents;
pub mod position;
pub mod segment;

pub use contents::{contents_at, previous_contents};
pub use position::{compare_positions, sort_segment_rows};
pub use segment::{compare_segments, segments_equal, SegmentComparison, IGNORED_SEGMENT_ATTRIBUTES};
