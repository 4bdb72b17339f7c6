//! Boolean tag queries
//!
//! A query string such as `#breakout AND (#morning OR #open) AND (NOT #failed)`
//! goes through three stages:
//!
//! 1. [`validate`] checks the raw text and reports every syntax problem it finds
//! 2. [`parse`] turns validated text into a [`QueryNode`] tree
//! 3. [`evaluate`] filters a record collection with that tree
//!
//! Operator precedence, lowest first: `OR`, `AND`, prefix `NOT`, tag.
//! Keywords are case-insensitive and tags may omit their leading `#`.

pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod validator;

pub use evaluator::evaluate;
pub use parser::{ParseError, parse};
pub use validator::{SyntaxError, ValidationOutcome, validate};

use crate::tags::Tag;
use std::fmt;

/// A node of a parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Records carrying this tag
    Tag(Tag),
    /// Records matching every child; no children matches everything
    And(Vec<QueryNode>),
    /// Records matching any child; no children matches nothing
    Or(Vec<QueryNode>),
    /// Records not matching the child
    Not(Box<QueryNode>),
}

impl QueryNode {
    #[must_use]
    pub const fn match_all() -> Self {
        Self::And(Vec::new())
    }

    #[must_use]
    pub const fn match_none() -> Self {
        Self::Or(Vec::new())
    }

    #[must_use]
    pub fn tag(raw: &str) -> Self {
        Self::Tag(Tag::new(raw))
    }

    #[must_use]
    pub fn negate(child: Self) -> Self {
        Self::Not(Box::new(child))
    }

    /// Every tag leaf in tree order, first occurrence only.
    ///
    /// Leaves under a `Not` are included; they are referenced by the query
    /// even though they never make a record match.
    #[must_use]
    pub fn flatten_tags(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        self.collect_tags(&mut tags);
        tags
    }

    fn collect_tags(&self, out: &mut Vec<Tag>) {
        match self {
            Self::Tag(tag) => {
                if !out.contains(tag) {
                    out.push(tag.clone());
                }
            }
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_tags(out);
                }
            }
            Self::Not(child) => child.collect_tags(out),
        }
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::And(children) | Self::Or(children) => {
                let keyword = if matches!(self, Self::And(_)) { " AND " } else { " OR " };
                f.write_str("(")?;
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(keyword)?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            Self::Not(child) => write!(f, "(NOT {child})"),
        }
    }
}
