#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{fix, fix_dictionary, ord, seg_row};
use fixdict_core::diff::{
    compare_segments, contents_at, previous_contents, sort_segment_rows, SegmentComparison,
};
use fixdict_core::{AttributeBag, ContainerKind};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<(u16, String)>> {
    prop::collection::vec((1u16..2000, "[a-zA-Z ]{0,20}"), 0..8)
}

fn to_rows(layout: &[(u16, String)], msg_id: &str) -> Vec<AttributeBag> {
    layout.iter()
        .enumerate()
        .map(|(i, (tag, description))| {
            let mut row = seg_row(msg_id, &tag.to_string(), &(i + 1).to_string());
            row.insert("Description".to_string(), description.clone());
            row
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_description_and_msg_id_never_count(
        layout in rows_strategy(),
        other_descriptions in prop::collection::vec("[a-z]{0,10}", 8),
    ) {
        let current = to_rows(&layout, "14");
        let mut previous = to_rows(&layout, "99");
        for (row, description) in previous.iter_mut().zip(&other_descriptions) {
            row.insert("Description".to_string(), description.clone());
        }
        prop_assert_eq!(
            compare_segments(Some(current.as_slice()), Some(previous.as_slice())),
            SegmentComparison::Equal
        );
    }

    #[test]
    fn prop_sorting_restores_equality(layout in rows_strategy()) {
        let sorted = to_rows(&layout, "14");
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        sort_segment_rows(&mut shuffled);
        prop_assert!(compare_segments(Some(shuffled.as_slice()), Some(sorted.as_slice())).is_equal());
    }
}

#[test]
fn test_extra_attribute_is_a_change() {
    let previous = vec![seg_row("14", "11", "1")];
    let mut current = previous.clone();
    current[0].insert("Reqd".to_string(), "Y".to_string());

    assert_eq!(
        compare_segments(Some(current.as_slice()), Some(previous.as_slice())),
        SegmentComparison::AttributeCountDiffers {
            row: 0,
            current: 4,
            previous: 3
        }
    );
}

#[test]
fn test_contents_follow_diff_alias() {
    let dict = fix_dictionary();

    let fixt = contents_at(&dict, ContainerKind::Message, "D", ord(fix::FIXT_1_1)).unwrap();
    let fix50 = contents_at(&dict, ContainerKind::Message, "D", ord(fix::FIX_5_0)).unwrap();
    assert_eq!(fixt, fix50);

    // Only FIXT.1.1 has BZ; the alias target lacks it, so its own content is used
    assert!(contents_at(&dict, ContainerKind::Message, "BZ", ord(fix::FIXT_1_1)).is_some());
    assert!(previous_contents(&dict, ContainerKind::Message, "BZ", ord(fix::FIXT_1_1)).is_none());
}

#[test]
fn test_oldest_version_has_no_predecessor() {
    let dict = fix_dictionary();
    assert!(previous_contents(&dict, ContainerKind::Message, "D", ord(fix::FIX_4_0)).is_none());
}
