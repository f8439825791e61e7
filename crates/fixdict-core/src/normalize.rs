//! Name and description normalizer
//!
//! Pure text functions: display-name synthesis from free-text descriptions,
//! enum-name anomaly checks, field-name tidying and deprecation-marker repair.
//! Nothing here logs or mutates tables; callers turn the returned anomalies
//! into report warnings.

use crate::catalog::VersionCatalog;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default number of leading characters two enum names must differ within
pub const DEFAULT_MAX_COMMON_PREFIX: usize = 43;

/// Synthesize a display name from a free-text description
///
/// Letters, digits, spaces and underscores are kept. A hyphen is kept only
/// when the character before it is not a space. Junk before the first kept
/// character is skipped; the first disallowed character after that ends the
/// scan. The result is trimmed, `_` and `-` become spaces, and the words are
/// camel-cased.
///
/// ```
/// use fixdict_core::normalize::synthesize_name;
///
/// assert_eq!(
///     synthesize_name("Non-Disclosed quantity (optional)"),
///     "NonDisclosedQuantity"
/// );
/// assert_eq!(synthesize_name("(*)"), "");
/// ```
pub fn synthesize_name(description: &str) -> String {
    let mut kept = String::with_capacity(description.len());
    let mut previous: Option<char> = None;

    for c in description.chars() {
        if c.is_alphanumeric() || c == ' ' || c == '_' {
            kept.push(c);
        } else if !kept.is_empty() {
            if c == '-' && previous != Some(' ') {
                kept.push(c);
            } else {
                break;
            }
        }
        previous = Some(c);
    }

    let spaced = kept.trim().replace(['_', '-'], " ");
    camel_case(&spaced)
}

/// Upper-case the first letter of each whitespace-delimited word and join them
pub fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if first.is_lowercase() {
                out.extend(first.to_uppercase());
            } else {
                out.push(first);
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Something questionable about an enum value's display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAnomaly {
    /// Shares its leading `max_common_prefix` characters with an earlier name
    /// of the same tag, ignoring case
    Similar { other: String },
    /// One character or empty
    Short,
    /// Parses as a 32-bit signed integer
    Numeric,
    /// Longer than `max_common_prefix`
    Long { len: usize, max: usize },
}

fn prefix(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((byte, _)) => &name[..byte],
        None => name,
    }
}

/// Case-insensitive equality over Unicode scalar values
///
/// Characters match when equal, or equal after upper-casing or lower-casing
/// each side, so `"Öffnung"` and `"ÖFFNUNG"` compare equal.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
        })
}

/// Check a candidate enum name against the names already seen for its tag
///
/// Records the name length in `tally`. The caller adds the name to `seen`
/// afterwards; a name is never compared with itself.
pub fn check_enum_name(
    name: &str,
    seen: &[String],
    max_common_prefix: usize,
    tally: &mut NameLengthTally,
) -> Vec<NameAnomaly> {
    let len = name.chars().count();
    tally.record(len);

    let mut anomalies = Vec::new();

    let candidate = prefix(name, max_common_prefix);
    if let Some(other) = seen
        .iter()
        .find(|other| eq_ignore_case(prefix(other, max_common_prefix), candidate))
    {
        anomalies.push(NameAnomaly::Similar {
            other: other.clone(),
        });
    }

    // Signed values such as "-1" count; values beyond i32 do not
    if name.parse::<i32>().is_ok() {
        anomalies.push(NameAnomaly::Numeric);
    }

    if len <= 1 {
        anomalies.push(NameAnomaly::Short);
    }

    if len > max_common_prefix {
        anomalies.push(NameAnomaly::Long {
            len,
            max: max_common_prefix,
        });
    }

    anomalies
}

/// Histogram of enum display-name lengths seen in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameLengthTally {
    counts: BTreeMap<usize, usize>,
}

impl NameLengthTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, len: usize) {
        *self.counts.entry(len).or_insert(0) += 1;
    }

    pub fn count(&self, len: usize) -> usize {
        self.counts.get(&len).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn longest(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// (length, count) pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(len, count)| (*len, *count))
    }
}

/// Replace `/` with a space and trim
pub fn tidy_field_name(name: &str) -> String {
    name.replace('/', " ").trim().to_string()
}

/// A field name that is not an upper-case letter followed by ASCII letters and digits
pub fn is_funny_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => !chars.all(|c| c.is_ascii_alphanumeric()),
        _ => true,
    }
}

/// Repair a deprecation marker that almost names a catalog version
///
/// Returns the canonical label when replacing the first space with `.` turns
/// the marker into a known label (`"FIX 5.0"` → `"FIX.5.0"`). Returns `None`
/// for a marker that is already a label or cannot be repaired.
pub fn normalize_deprecated_marker(marker: &str, catalog: &VersionCatalog) -> Option<String> {
    let trimmed = marker.trim();
    if catalog.ordinal_of(trimmed).is_some() {
        return None;
    }
    if !trimmed.contains(' ') {
        return None;
    }
    let candidate = trimmed.replacen(' ', ".", 1);
    catalog
        .ordinal_of(&candidate)
        .map(|ordinal| catalog.label(ordinal).to_string())
}
