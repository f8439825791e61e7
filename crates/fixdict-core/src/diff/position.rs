use crate::model::{attrs, AttributeBag};
use std::cmp::Ordering;

/// Order two dotted `Position` strings
///
/// Dot-separated parts are compared numerically when both parse, as text
/// otherwise; a shorter position that prefixes a longer one sorts first.
pub fn compare_positions(a: &str, b: &str) -> Ordering {
    let mut left = a.trim().split('.');
    let mut right = b.trim().split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Sort segment rows by `Position`; rows without one keep their order at the end
pub fn sort_segment_rows(rows: &mut [AttributeBag]) {
    rows.sort_by(|a, b| match (a.get(attrs::POSITION), b.get(attrs::POSITION)) {
        (Some(x), Some(y)) => compare_positions(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
