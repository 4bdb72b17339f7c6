//! Match highlighting
//!
//! Reports which of a record's tags were referenced by the query. The tag list
//! comes from [`QueryNode::flatten_tags`](crate::query::QueryNode::flatten_tags),
//! which includes tags under `NOT`, so a highlight says "the query mentions
//! this tag", not "this tag made the record match".

use crate::record::Tagged;
use crate::tags::{Tag, normalize};
use serde::Serialize;

/// Tags of one record that the query referenced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight<Id> {
    pub record_id: Id,
    pub matching_tags: Vec<Tag>,
}

/// Intersect each record's tags with `matched_tags`.
///
/// One entry per record, in record order. Tags are listed in the record's own
/// order, normalized and without repeats. Records with no referenced tags get
/// an empty list.
pub fn highlights<R: Tagged>(records: &[&R], matched_tags: &[Tag]) -> Vec<Highlight<R::Id>> {
    records
        .iter()
        .map(|record| {
            let mut matching_tags: Vec<Tag> = Vec::new();
            for tag in record.tags().iter().map(|raw| normalize(raw)) {
                if !tag.is_empty() && matched_tags.contains(&tag) && !matching_tags.contains(&tag) {
                    matching_tags.push(tag);
                }
            }
            Highlight { record_id: record.id(), matching_tags }
        })
        .collect()
}
