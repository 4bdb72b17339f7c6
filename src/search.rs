//! Search entry point
//!
//! [`search`] runs a raw query through the whole pipeline:
//! validate, parse, evaluate, highlight. It never fails. A query with syntax
//! errors produces an invalid, empty result carrying the error messages, and a
//! validated query the parser still rejects falls back to a best-effort tree:
//!
//! - input starting with `#` is treated as a single tag
//! - anything else matches every record
//!
//! # Examples
//!
//! ```
//! use tagquery::{TaggedRecord, search};
//!
//! let records = vec![
//!     TaggedRecord::new(1, vec!["#breakout".into(), "#morning".into()]),
//!     TaggedRecord::new(2, vec!["#reversal".into(), "#afternoon".into()]),
//! ];
//!
//! let result = search(&records, "#breakout OR #reversal");
//! assert!(result.is_valid);
//! assert_eq!(result.matched_records.len(), 2);
//!
//! let result = search(&records, "#breakout AND");
//! assert!(!result.is_valid);
//! assert!(result.matched_records.is_empty());
//! ```

use crate::highlight::{Highlight, highlights};
use crate::query::{QueryNode, evaluate, parse, validate};
use crate::record::Tagged;
use crate::tags::{Tag, normalize};

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a, R: Tagged> {
    /// Matching records, borrowed from the searched collection
    pub matched_records: Vec<&'a R>,
    /// Every tag the query references, including negated ones
    pub matched_tags: Vec<Tag>,
    /// Referenced tags found on each matched record
    pub highlights: Vec<Highlight<R::Id>>,
    pub is_valid: bool,
    /// Syntax errors, ready for display
    pub errors: Vec<String>,
}

impl<R: Tagged> SearchResult<'_, R> {
    fn invalid(errors: Vec<String>) -> Self {
        Self {
            matched_records: Vec::new(),
            matched_tags: Vec::new(),
            highlights: Vec::new(),
            is_valid: false,
            errors,
        }
    }
}

/// Search `records` with a raw query string.
pub fn search<'a, R: Tagged>(records: &'a [R], raw_query: &str) -> SearchResult<'a, R> {
    tracing::debug!("searching {} record(s) for {raw_query:?}", records.len());

    let outcome = validate(raw_query);
    if !outcome.is_valid {
        tracing::debug!("query rejected with {} error(s)", outcome.errors.len());
        return SearchResult::invalid(outcome.messages());
    }

    let tree = parse_or_fallback(raw_query);
    let matched_records = evaluate(records, &tree);
    let matched_tags = tree.flatten_tags();
    let highlights = highlights(&matched_records, &matched_tags);

    tracing::debug!("{} of {} record(s) matched {tree}", matched_records.len(), records.len());

    SearchResult { matched_records, matched_tags, highlights, is_valid: true, errors: Vec::new() }
}

/// Parse a query, degrading to a single tag or the match-all query on failure.
#[must_use]
pub fn parse_or_fallback(raw_query: &str) -> QueryNode {
    match parse(raw_query) {
        Ok(tree) => tree,
        Err(e) => {
            let trimmed = raw_query.trim();
            let fallback = if trimmed.starts_with('#') {
                QueryNode::Tag(normalize(trimmed))
            } else {
                QueryNode::match_all()
            };
            tracing::debug!("parse failed ({e}), falling back to {fallback}");
            fallback
        }
    }
}
