//! Recursive-descent query parser
//!
//! Parsing works on the token stream from [`tokenize`] and descends by
//! precedence, lowest first:
//!
//! 1. redundant parentheses around the whole expression are removed
//! 2. top-level `OR` splits the expression into an [`QueryNode::Or`]
//! 3. top-level `AND` splits it into an [`QueryNode::And`]
//! 4. a leading `NOT` wraps the rest in [`QueryNode::Not`]
//! 5. whatever is left is a single tag
//!
//! The parser expects input that already passed [`validate`](super::validate).
//! Anything it cannot make sense of is reported as a [`ParseError`]; choosing a
//! fallback is left to the caller. Nesting is capped at [`MAX_DEPTH`] levels.

use super::QueryNode;
use super::lexer::{Operator, Token, tokenize};
use crate::tags::normalize;
use thiserror::Error;

/// Deepest nesting of groups and operators the parser descends into
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An operator is missing an operand on one side
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(&'static str),

    /// Operands sit next to each other, or `NOT` appears mid-expression
    #[error("Expected an operator between operands")]
    MissingOperator,

    /// `()` with nothing inside
    #[error("Empty group")]
    EmptyGroup,

    /// Parentheses do not pair up
    #[error("Unbalanced parentheses")]
    UnbalancedGroup,

    /// Groups or operators nest deeper than [`MAX_DEPTH`]
    #[error("Query nests deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Parse a query string into an expression tree.
///
/// An empty query parses to the match-all query.
///
/// # Errors
/// Returns a [`ParseError`] when the query is structurally malformed. Input that
/// passed validation only fails here for empty groups, operands placed next
/// to each other without an operator, or nesting deeper than [`MAX_DEPTH`].
///
/// # Examples
/// ```
/// use tagquery::query::{QueryNode, parse};
///
/// let node = parse("#a OR #b AND #c").unwrap();
/// assert_eq!(
///     node,
///     QueryNode::Or(vec![
///         QueryNode::tag("a"),
///         QueryNode::And(vec![QueryNode::tag("b"), QueryNode::tag("c")]),
///     ])
/// );
/// ```
pub fn parse(raw: &str) -> Result<QueryNode, ParseError> {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return Ok(QueryNode::match_all());
    }
    parse_expression(&tokens, 0)
}

fn parse_expression(tokens: &[Token<'_>], depth: usize) -> Result<QueryNode, ParseError> {
    let (tokens, depth) = strip_enclosing(tokens, depth)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyGroup);
    }

    let parts = split_top_level(tokens, Operator::Or)?;
    if parts.len() >= 2 {
        return parse_operands(&parts, Operator::Or, depth).map(QueryNode::Or);
    }

    let parts = split_top_level(tokens, Operator::And)?;
    if parts.len() >= 2 {
        return parse_operands(&parts, Operator::And, depth).map(QueryNode::And);
    }

    if let Some((Token::Op(Operator::Not), rest)) = tokens.split_first() {
        return parse_operand(rest, Operator::Not, depth).map(QueryNode::negate);
    }

    parse_atom(tokens)
}

fn parse_operands(
    parts: &[&[Token<'_>]],
    op: Operator,
    depth: usize,
) -> Result<Vec<QueryNode>, ParseError> {
    parts.iter().map(|part| parse_operand(part, op, depth)).collect()
}

fn parse_operand(tokens: &[Token<'_>], op: Operator, depth: usize) -> Result<QueryNode, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::MissingOperand(op.keyword()));
    }
    let depth = descend(depth)?;
    parse_expression(tokens, depth)
}

fn descend(depth: usize) -> Result<usize, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }
    Ok(depth + 1)
}

fn parse_atom(tokens: &[Token<'_>]) -> Result<QueryNode, ParseError> {
    let mut text = String::new();
    for token in tokens {
        match token {
            Token::Word(word) => text.push_str(word),
            Token::Op(_) | Token::Open | Token::Close => return Err(ParseError::MissingOperator),
        }
    }
    Ok(QueryNode::Tag(normalize(&text)))
}

/// Remove parentheses wrapping the entire token slice, repeatedly.
///
/// Every removed pair counts as one level of nesting.
fn strip_enclosing<'t, 'a>(
    mut tokens: &'t [Token<'a>],
    mut depth: usize,
) -> Result<(&'t [Token<'a>], usize), ParseError> {
    while let Some(Token::Open) = tokens.first() {
        let close = matching_close(tokens).ok_or(ParseError::UnbalancedGroup)?;
        if close + 1 != tokens.len() {
            break;
        }
        depth = descend(depth)?;
        tokens = &tokens[1..close];
    }
    Ok((tokens, depth))
}

/// Index of the `)` that closes the `(` at index 0.
fn matching_close(tokens: &[Token<'_>]) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on `op` wherever it appears outside any group.
fn split_top_level<'t, 'a>(
    tokens: &'t [Token<'a>],
    op: Operator,
) -> Result<Vec<&'t [Token<'a>]>, ParseError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedGroup)?,
            Token::Op(found) if *found == op && depth == 0 => {
                parts.push(&tokens[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedGroup);
    }
    parts.push(&tokens[start..]);

    Ok(parts)
}
