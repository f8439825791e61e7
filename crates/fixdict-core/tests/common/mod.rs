use fixdict_core::model::bag;
use fixdict_core::{
    AttributeBag, RecordTable, VersionCatalog, VersionInfo, VersionOrdinal, VersionSnapshot,
    VersionedDictionary,
};
use std::collections::BTreeMap;

/// Catalog of `n` versions "V0".."V{n-1}" with no diff aliases
///
/// Watermarks grow by 100 per version.
#[allow(dead_code)]
pub fn plain_catalog(n: usize) -> VersionCatalog {
    let versions = (0..n)
        .map(|i| VersionInfo::new(format!("V{}", i), i.to_string(), 100 * (i as u32 + 1)))
        .collect();
    VersionCatalog::new(versions, BTreeMap::new()).unwrap()
}

/// One segment row
#[allow(dead_code)]
pub fn seg_row(msg_id: &str, tag_text: &str, position: &str) -> AttributeBag {
    bag([
        ("MsgID", msg_id),
        ("TagText", tag_text),
        ("Position", position),
    ])
}

/// Add a message with its segment to a snapshot
#[allow(dead_code)]
pub fn add_message(
    snap: &mut VersionSnapshot,
    msg_type: &str,
    name: &str,
    msg_id: &str,
    rows: Vec<AttributeBag>,
) {
    snap.messages.push(
        msg_type,
        bag([("MsgType", msg_type), ("MessageName", name), ("MsgID", msg_id)]),
    );
    for row in rows {
        snap.segments.push(msg_id, row);
    }
}

/// Add a component with its segment to a snapshot
#[allow(dead_code)]
pub fn add_component(snap: &mut VersionSnapshot, name: &str, msg_id: &str, rows: Vec<AttributeBag>) {
    snap.components
        .push(name, bag([("ComponentName", name), ("MsgID", msg_id)]));
    for row in rows {
        snap.segments.push(msg_id, row);
    }
}

/// Add a plain field
#[allow(dead_code)]
pub fn add_field(snap: &mut VersionSnapshot, tag: &str, name: &str) {
    add_field_to(&mut snap.fields, tag, name);
}

#[allow(dead_code)]
pub fn add_field_to(fields: &mut RecordTable, tag: &str, name: &str) {
    fields.push(
        tag,
        bag([("Tag", tag), ("FieldName", name), ("Type", "String")]),
    );
}

/// Ordinals of the standard FIX catalog
#[allow(dead_code)]
pub mod fix {
    pub const FIX_4_0: usize = 0;
    pub const FIX_4_3: usize = 3;
    pub const FIX_4_4: usize = 4;
    pub const FIX_5_0: usize = 5;
    pub const FIXT_1_1: usize = 6;
    pub const FIX_5_0_SP2: usize = 8;
}

/// Snapshot of one version of a small FIX-shaped repository
///
/// - NewOrderSingle (D) gains the Instrument component in FIX.4.3 and has a
///   description-only change in FIX.5.0SP1
/// - ExecutionReport (8) never changes
/// - Advertisement (7) loses its segment in FIX.5.0 but keeps its message row
/// - SessionStatusNotice (BZ) first appears in FIXT.1.1
/// - Side (54) gains value "5" in FIX.4.4
#[allow(dead_code)]
pub fn fix_snapshot(ordinal: usize) -> VersionSnapshot {
    let mut snap = VersionSnapshot::new();

    add_field(&mut snap, "11", "ClOrdID");
    add_field(&mut snap, "54", "Side");
    add_field(&mut snap, "55", "Symbol");
    if ordinal >= fix::FIX_4_3 {
        add_field(&mut snap, "526", "SecondaryClOrdID");
    }

    snap.enums
        .push("54", bag([("Tag", "54"), ("Enum", "1"), ("Description", "Buy")]));
    snap.enums
        .push("54", bag([("Tag", "54"), ("Enum", "2"), ("Description", "Sell")]));
    if ordinal >= fix::FIX_4_4 {
        snap.enums.push(
            "54",
            bag([("Tag", "54"), ("Enum", "5"), ("Description", "Sell short")]),
        );
    }

    // Rows deliberately out of Position order in odd versions
    let mut order_rows = if ordinal % 2 == 1 {
        vec![seg_row("14", "54", "2"), seg_row("14", "11", "1")]
    } else {
        vec![seg_row("14", "11", "1"), seg_row("14", "54", "2")]
    };
    if ordinal >= fix::FIX_4_3 {
        order_rows.push(seg_row("14", "Instrument", "3"));
    }
    let wording = if ordinal > fix::FIXT_1_1 { "Reworded" } else { "Original" };
    for row in &mut order_rows {
        row.insert("Description".to_string(), wording.to_string());
    }
    add_message(&mut snap, "D", "NewOrderSingle", "14", order_rows);

    add_message(
        &mut snap,
        "8",
        "ExecutionReport",
        "9",
        vec![seg_row("9", "11", "1"), seg_row("9", "54", "2")],
    );

    if ordinal < fix::FIX_5_0 {
        add_message(
            &mut snap,
            "7",
            "Advertisement",
            "7",
            vec![seg_row("7", "55", "1")],
        );
    } else {
        let mut row = bag([("MsgType", "7"), ("MessageName", "Advertisement"), ("MsgID", "7")]);
        if ordinal == fix::FIX_5_0_SP2 {
            row.insert("Deprecated".to_string(), "FIX 5.0".to_string());
        }
        snap.messages.push("7", row);
    }

    if ordinal >= fix::FIXT_1_1 {
        add_message(
            &mut snap,
            "BZ",
            "SessionStatusNotice",
            "200",
            vec![seg_row("200", "11", "1")],
        );
    }

    if ordinal >= fix::FIX_4_3 {
        add_component(
            &mut snap,
            "Instrument",
            "1001",
            vec![seg_row("1001", "55", "1")],
        );
    }

    snap
}

/// Every version of the standard catalog loaded from [`fix_snapshot`]
#[allow(dead_code)]
pub fn fix_dictionary() -> VersionedDictionary {
    let catalog = VersionCatalog::fix_standard();
    let mut dict = VersionedDictionary::new(catalog.clone());
    for ordinal in catalog.ordinals() {
        dict.insert_snapshot(ordinal, fix_snapshot(ordinal.index()))
            .unwrap();
    }
    dict
}

#[allow(dead_code)]
pub fn ord(index: usize) -> VersionOrdinal {
    VersionOrdinal::new(index)
}

/// Span slots from plain indices
#[allow(dead_code)]
pub fn slots(indices: &[Option<usize>]) -> Vec<Option<VersionOrdinal>> {
    indices.iter().map(|i| i.map(VersionOrdinal::new)).collect()
}
