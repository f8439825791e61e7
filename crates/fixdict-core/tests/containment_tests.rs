#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{add_component, add_message, ord, plain_catalog, seg_row};
use fixdict_core::model::bag;
use fixdict_core::{ContainerKind, ContainmentIndex, DictError, VersionSnapshot, VersionedDictionary};
use proptest::prelude::*;

const REFERENCES: [&str; 5] = ["11", "54", "55", "Parties", "Instrument"];

/// (version, container) -> referenced names
type Layout = Vec<Vec<Vec<usize>>>;

fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(0..REFERENCES.len(), 0..4), 4),
        3,
    )
}

fn build_dict(layout: &Layout) -> VersionedDictionary {
    let mut dict = VersionedDictionary::new(plain_catalog(layout.len()));
    for (version, containers) in layout.iter().enumerate() {
        let mut snap = VersionSnapshot::new();
        for (i, refs) in containers.iter().enumerate() {
            let msg_id = i.to_string();
            let rows = refs
                .iter()
                .enumerate()
                .map(|(pos, r)| seg_row(&msg_id, REFERENCES[*r], &(pos + 1).to_string()))
                .collect();
            if i % 2 == 0 {
                add_message(&mut snap, &format!("M{}", i), &format!("Message{}", i), &msg_id, rows);
            } else {
                add_component(&mut snap, &format!("Component{}", i), &msg_id, rows);
            }
        }
        dict.insert_snapshot(ord(version), snap).unwrap();
    }
    dict
}

proptest! {
    #[test]
    fn prop_index_independent_of_container_order(layout in layout_strategy()) {
        let dict = build_dict(&layout);
        let forward = ContainmentIndex::build(&dict).unwrap();
        let reverse = ContainmentIndex::build_in_order(
            &dict,
            &[ContainerKind::Component, ContainerKind::Message],
        )
        .unwrap();
        prop_assert_eq!(forward, reverse);
    }

    #[test]
    fn prop_every_reference_is_indexed(layout in layout_strategy()) {
        let dict = build_dict(&layout);
        let index = ContainmentIndex::build(&dict).unwrap();
        for containers in &layout {
            for (i, refs) in containers.iter().enumerate() {
                let display = if i % 2 == 0 {
                    format!("Message{}", i)
                } else {
                    format!("Component{}", i)
                };
                for r in refs {
                    let indexed = index.containers_of(REFERENCES[*r]).unwrap();
                    prop_assert!(indexed.contains(&display));
                }
            }
        }
    }
}

#[test]
fn test_message_without_name_is_fatal() {
    let mut dict = VersionedDictionary::new(plain_catalog(1));
    let mut snap = VersionSnapshot::new();
    snap.messages.push("D", bag([("MsgType", "D"), ("MsgID", "1")]));
    dict.insert_snapshot(ord(0), snap).unwrap();

    let err = ContainmentIndex::build(&dict).unwrap_err();
    assert!(matches!(err, DictError::MissingAttribute { .. }));
}

#[test]
fn test_only_newest_containers_are_indexed() {
    let mut dict = VersionedDictionary::new(plain_catalog(2));
    let mut old = VersionSnapshot::new();
    add_message(&mut old, "Z", "Gone", "1", vec![seg_row("1", "11", "1")]);
    dict.insert_snapshot(ord(0), old).unwrap();
    dict.insert_snapshot(ord(1), VersionSnapshot::new()).unwrap();

    let index = ContainmentIndex::build(&dict).unwrap();
    assert!(index.is_empty());
}
