//! Testing utilities for tagquery
//!
//! Small builders for record collections used across the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::record::TaggedRecord;

/// Build a record collection from `(id, tags)` pairs.
pub fn records(spec: &[(u64, &[&str])]) -> Vec<TaggedRecord> {
    spec.iter()
        .map(|(id, tags)| TaggedRecord::new(*id, tags.iter().map(|t| (*t).to_string()).collect()))
        .collect()
}

/// Ids of matched records, in result order.
pub fn ids(matched: &[&TaggedRecord]) -> Vec<u64> {
    matched.iter().map(|r| r.id).collect()
}

/// Two trade journal entries used by the end-to-end examples.
pub fn journal() -> Vec<TaggedRecord> {
    records(&[
        (1, &["#breakout", "#morning"]),
        (2, &["#reversal", "#afternoon"]),
    ])
}

/// A larger journal with skewed tag usage:
/// `#breakout` ×4, `#morning` ×3, `#reversal` ×2, `#afternoon` ×2, `#gap_up` ×1, `#scalp` ×1.
pub fn busy_journal() -> Vec<TaggedRecord> {
    records(&[
        (1, &["#breakout", "#morning"]),
        (2, &["#breakout", "#morning", "#gap_up"]),
        (3, &["#breakout", "#afternoon"]),
        (4, &["#breakout", "#reversal", "#morning"]),
        (5, &["#reversal", "#afternoon"]),
        (6, &["#scalp"]),
        (7, &[]),
    ])
}
