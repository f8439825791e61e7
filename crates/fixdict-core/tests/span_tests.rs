#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{add_message, ord, plain_catalog, seg_row, slots};
use fixdict_core::model::bag;
use fixdict_core::span::{build_span, build_spans};
use fixdict_core::{ContainerKind, VersionSnapshot, VersionedDictionary};

/// Nine plain versions; message "X" lives in 2..=5, changes at 5 and is gone after
fn retired_message_dict() -> VersionedDictionary {
    let mut dict = VersionedDictionary::new(plain_catalog(9));
    for i in 0..9 {
        let mut snap = VersionSnapshot::new();
        match i {
            2..=4 => add_message(&mut snap, "X", "Retired", "1", vec![seg_row("1", "11", "1")]),
            5 => add_message(
                &mut snap,
                "X",
                "Retired",
                "1",
                vec![seg_row("1", "11", "1"), seg_row("1", "55", "2")],
            ),
            8 => snap
                .messages
                .push("X", bag([("MsgType", "X"), ("MessageName", "Retired"), ("MsgID", "1")])),
            _ => {}
        }
        dict.insert_snapshot(ord(i), snap).unwrap();
    }
    dict
}

#[test]
fn test_span_of_retired_message() {
    let dict = retired_message_dict();
    let span = build_span(&dict, ContainerKind::Message, "X");

    assert_eq!(
        span.slots(),
        slots(&[None, None, Some(2), Some(2), Some(2), Some(5), None, None, None])
    );
    assert_eq!(dict.catalog().label(span.first_present().unwrap()), "V2");
    assert_eq!(
        dict.catalog().label(span.deprecated_in(dict.catalog()).unwrap()),
        "V6"
    );
}

#[test]
fn test_span_length_matches_catalog() {
    let dict = retired_message_dict();
    let spans = build_spans(&dict, ContainerKind::Message).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans["X"].len(), dict.catalog().len());
}

#[test]
fn test_reappearing_content_counts_as_change() {
    let mut dict = VersionedDictionary::new(plain_catalog(4));
    for i in 0..4 {
        let mut snap = VersionSnapshot::new();
        if i != 1 {
            add_message(&mut snap, "A", "Again", "1", vec![seg_row("1", "11", "1")]);
        }
        dict.insert_snapshot(ord(i), snap).unwrap();
    }

    let span = build_span(&dict, ContainerKind::Message, "A");
    assert_eq!(span.slots(), slots(&[Some(0), None, Some(2), Some(2)]));
    assert_eq!(span.deprecated_in(dict.catalog()), None);
}

#[test]
fn test_unloaded_versions_are_absent() {
    let mut dict = VersionedDictionary::new(plain_catalog(3));
    let mut snap = VersionSnapshot::new();
    add_message(&mut snap, "A", "Late", "1", vec![seg_row("1", "11", "1")]);
    dict.insert_snapshot(ord(2), snap).unwrap();

    let span = build_span(&dict, ContainerKind::Message, "A");
    assert_eq!(span.slots(), slots(&[None, None, Some(2)]));
}

#[test]
fn test_aliased_version_reads_target_content() {
    let mut dict = common::fix_dictionary();
    fixdict_core::ops::sort_segments(&mut dict);

    // FIXT.1.1 edits the segment, but it is compared using FIX.5.0 content
    let fixt = dict
        .snapshot_mut(ord(common::fix::FIXT_1_1))
        .unwrap();
    fixt.segments.push("9", seg_row("9", "55", "3"));

    let span = build_span(&dict, ContainerKind::Message, "8");
    assert_eq!(span.slot(ord(common::fix::FIXT_1_1)), Some(ord(0)));
    // FIX.5.0SP1 is compared against FIX.5.0 via the alias, so no change shows
    assert_eq!(span.slot(ord(7)), Some(ord(0)));
}
