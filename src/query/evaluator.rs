//! Query evaluation over record collections
//!
//! Evaluation walks the tree once per call. Each record's tags are normalized a
//! single time up front, then every node narrows or combines lists of record
//! positions:
//!
//! - `Tag` keeps the records that carry the tag
//! - `And` feeds the running result through each child in turn
//! - `Or` evaluates each child against the full input and unions the results
//! - `Not` removes the child's matches from its input
//!
//! Results keep input order for `Tag`, `And` and `Not`; `Or` lists records in
//! the order children first produced them, each record once.

use super::QueryNode;
use crate::record::Tagged;
use crate::tags::Tag;
use std::collections::HashSet;

/// Filter `records` down to those matching `node`.
///
/// Records are compared by position in `records`, so two equal records are
/// still distinct matches.
pub fn evaluate<'r, R: Tagged>(records: &'r [R], node: &QueryNode) -> Vec<&'r R> {
    let index: Vec<HashSet<Tag>> = records.iter().map(Tagged::normalized_tags).collect();
    let all: Vec<usize> = (0..records.len()).collect();

    eval_node(&index, &all, node)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

fn eval_node(index: &[HashSet<Tag>], input: &[usize], node: &QueryNode) -> Vec<usize> {
    match node {
        QueryNode::Tag(tag) => {
            if tag.is_empty() {
                return Vec::new();
            }
            input.iter().copied().filter(|&idx| index[idx].contains(tag)).collect()
        }
        QueryNode::And(children) => children
            .iter()
            .fold(input.to_vec(), |narrowed, child| eval_node(index, &narrowed, child)),
        QueryNode::Or(children) => {
            let mut seen = HashSet::new();
            let mut union = Vec::new();
            for child in children {
                for idx in eval_node(index, input, child) {
                    if seen.insert(idx) {
                        union.push(idx);
                    }
                }
            }
            union
        }
        QueryNode::Not(child) => {
            let excluded: HashSet<usize> = eval_node(index, input, child).into_iter().collect();
            input.iter().copied().filter(|idx| !excluded.contains(idx)).collect()
        }
    }
}
