use crate::catalog::VersionOrdinal;
use crate::model::{AttributeBag, ContainerKind, VersionedDictionary};

/// Segment rows in effect for a container at `ordinal`
///
/// An aliased version reads its alias target's segment. When the target does
/// not hold the container the version's own segment is used, so an entity
/// that first appears at an aliased version is still seen there.
pub fn contents_at<'a>(
    dict: &'a VersionedDictionary,
    kind: ContainerKind,
    key: &str,
    ordinal: VersionOrdinal,
) -> Option<&'a [AttributeBag]> {
    let target = dict.catalog().diff_target(ordinal);
    dict.segment(kind, key, target).or_else(|| {
        if target != ordinal {
            dict.segment(kind, key, ordinal)
        } else {
            None
        }
    })
}

/// Contents at the version before `ordinal`; `None` before the oldest version
pub fn previous_contents<'a>(
    dict: &'a VersionedDictionary,
    kind: ContainerKind,
    key: &str,
    ordinal: VersionOrdinal,
) -> Option<&'a [AttributeBag]> {
    ordinal
        .previous()
        .and_then(|previous| contents_at(dict, kind, key, previous))
}
