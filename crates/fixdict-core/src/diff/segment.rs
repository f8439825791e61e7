use crate::model::{attrs, AttributeBag};

/// Row attributes that never count as a structural change
pub const IGNORED_SEGMENT_ATTRIBUTES: [&str; 2] = [attrs::DESCRIPTION, attrs::MSG_ID];

/// Outcome of comparing a segment with its predecessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentComparison {
    Equal,
    /// The segment under test is absent
    MissingCurrent,
    /// The predecessor is absent (including before the oldest version)
    MissingPrevious,
    LengthDiffers { current: usize, previous: usize },
    AttributeCountDiffers { row: usize, current: usize, previous: usize },
    /// `attribute` of row `row` differs or is missing on the predecessor
    AttributeDiffers { row: usize, attribute: String },
}

impl SegmentComparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, SegmentComparison::Equal)
    }
}

impl std::fmt::Display for SegmentComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentComparison::Equal => write!(f, "equal"),
            SegmentComparison::MissingCurrent => write!(f, "segment absent"),
            SegmentComparison::MissingPrevious => write!(f, "predecessor absent"),
            SegmentComparison::LengthDiffers { current, previous } => {
                write!(f, "{} rows vs {} rows", current, previous)
            }
            SegmentComparison::AttributeCountDiffers {
                row,
                current,
                previous,
            } => write!(
                f,
                "row {} has {} attributes vs {}",
                row, current, previous
            ),
            SegmentComparison::AttributeDiffers { row, attribute } => {
                write!(f, "row {} differs in {}", row, attribute)
            }
        }
    }
}

/// Compare two segments, explaining the first difference found
pub fn compare_segments(
    current: Option<&[AttributeBag]>,
    previous: Option<&[AttributeBag]>,
) -> SegmentComparison {
    let Some(current) = current else {
        return SegmentComparison::MissingCurrent;
    };
    let Some(previous) = previous else {
        return SegmentComparison::MissingPrevious;
    };
    if current.len() != previous.len() {
        return SegmentComparison::LengthDiffers {
            current: current.len(),
            previous: previous.len(),
        };
    }

    for (row, (a, b)) in current.iter().zip(previous).enumerate() {
        if a.len() != b.len() {
            return SegmentComparison::AttributeCountDiffers {
                row,
                current: a.len(),
                previous: b.len(),
            };
        }
        for (name, value) in a {
            if IGNORED_SEGMENT_ATTRIBUTES.contains(&name.as_str()) {
                continue;
            }
            if b.get(name) != Some(value) {
                return SegmentComparison::AttributeDiffers {
                    row,
                    attribute: name.clone(),
                };
            }
        }
    }

    SegmentComparison::Equal
}

/// Semantic equality of two segments
pub fn segments_equal(current: Option<&[AttributeBag]>, previous: Option<&[AttributeBag]>) -> bool {
    compare_segments(current, previous).is_equal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bag;

    fn row(tag: &str, position: &str) -> AttributeBag {
        bag([
            ("MsgID", "14"),
            ("TagText", tag),
            ("Position", position),
            ("Reqd", "1"),
            ("Description", "text"),
        ])
    }

    #[test]
    fn test_identical_segments_are_equal() {
        let a = vec![row("11", "1"), row("55", "2")];
        let b = a.clone();
        assert!(segments_equal(Some(a.as_slice()), Some(b.as_slice())));
    }

    #[test]
    fn test_absent_predecessor_is_unequal_even_when_empty() {
        let empty: Vec<AttributeBag> = Vec::new();
        assert_eq!(
            compare_segments(Some(empty.as_slice()), None),
            SegmentComparison::MissingPrevious
        );
        assert_eq!(
            compare_segments(None, Some(empty.as_slice())),
            SegmentComparison::MissingCurrent
        );
        assert!(segments_equal(Some(empty.as_slice()), Some(empty.as_slice())));
    }

    #[test]
    fn test_description_and_msg_id_are_ignored() {
        let a = vec![row("11", "1")];
        let mut b = a.clone();
        b[0].insert("Description".to_string(), "reworded".to_string());
        b[0].insert("MsgID".to_string(), "99".to_string());
        assert!(segments_equal(Some(a.as_slice()), Some(b.as_slice())));
    }

    #[test]
    fn test_length_and_value_differences() {
        let a = vec![row("11", "1"), row("55", "2")];
        let b = vec![row("11", "1")];
        assert_eq!(
            compare_segments(Some(a.as_slice()), Some(b.as_slice())),
            SegmentComparison::LengthDiffers {
                current: 2,
                previous: 1
            }
        );

        let mut c = a.clone();
        c[1].insert("Reqd".to_string(), "0".to_string());
        assert_eq!(
            compare_segments(Some(a.as_slice()), Some(c.as_slice())),
            SegmentComparison::AttributeDiffers {
                row: 1,
                attribute: "Reqd".to_string()
            }
        );
    }

    #[test]
    fn test_attribute_count_must_match() {
        let a = vec![row("11", "1")];
        let mut b = a.clone();
        b[0].insert("Indent".to_string(), "1".to_string());
        assert!(matches!(
            compare_segments(Some(a.as_slice()), Some(b.as_slice())),
            SegmentComparison::AttributeCountDiffers { row: 0, .. }
        ));
    }

    #[test]
    fn test_same_count_different_names_is_unequal() {
        let a = vec![bag([("TagText", "11"), ("Reqd", "1")])];
        let b = vec![bag([("TagText", "11"), ("Indent", "1")])];
        assert!(!segments_equal(Some(a.as_slice()), Some(b.as_slice())));
    }
}
