//! Syntax validation for raw query strings
//!
//! Validation runs before parsing and never stops at the first problem: every
//! check runs and every failure is collected, so a caller can show the user the
//! full list at once. An empty or whitespace-only query is valid and means
//! "match everything".
//!
//! # Checks
//!
//! - **Grouping**: every `(` needs a later `)`, and the reverse
//! - **Consecutive operators**: no operator keyword may directly follow another;
//!   a parenthesis in between separates them (`#a AND (NOT #b)` is fine)
//! - **Leading operator**: a query may not start with `AND`/`OR`
//! - **Dangling operator**: a query may not end with `AND`/`OR`
//! - **Dangling NOT**: `NOT` may not be the final token

use super::lexer::{Operator, Token, tokenize};
use thiserror::Error;

/// A syntax problem in a query, displayed verbatim to end users
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Unmatched opening parenthesis")]
    UnmatchedOpen,

    #[error("Unmatched closing parenthesis")]
    UnmatchedClose,

    #[error("Consecutive operators: '{first}' followed by '{second}'")]
    ConsecutiveOperators { first: &'static str, second: &'static str },

    #[error("Query cannot end with operator '{0}'")]
    TrailingOperator(&'static str),

    #[error("Query cannot start with operator '{0}'")]
    LeadingOperator(&'static str),

    #[error("NOT must be followed by a tag or group")]
    DanglingNot,
}

/// Result of validating a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<SyntaxError>,
}

impl ValidationOutcome {
    fn from_errors(errors: Vec<SyntaxError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }

    /// Human-readable error messages
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validate a raw query string.
#[must_use]
pub fn validate(raw: &str) -> ValidationOutcome {
    let tokens = tokenize(raw);
    let mut errors = Vec::new();

    check_grouping(&tokens, &mut errors);
    check_consecutive(&tokens, &mut errors);

    let words: Vec<Token<'_>> = tokens
        .into_iter()
        .filter(|t| matches!(t, Token::Op(_) | Token::Word(_)))
        .collect();

    if let Some(Token::Op(op)) = words.first()
        && op.is_binary()
    {
        errors.push(SyntaxError::LeadingOperator(op.keyword()));
    }

    match words.last() {
        Some(Token::Op(Operator::Not)) => errors.push(SyntaxError::DanglingNot),
        Some(Token::Op(op)) => errors.push(SyntaxError::TrailingOperator(op.keyword())),
        _ => {}
    }

    ValidationOutcome::from_errors(errors)
}

fn check_grouping(tokens: &[Token<'_>], errors: &mut Vec<SyntaxError>) {
    let mut depth = 0usize;
    let mut stray_close = false;

    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close if depth == 0 => stray_close = true,
            Token::Close => depth -= 1,
            _ => {}
        }
    }

    if depth > 0 {
        errors.push(SyntaxError::UnmatchedOpen);
    }
    if stray_close {
        errors.push(SyntaxError::UnmatchedClose);
    }
}

fn check_consecutive(tokens: &[Token<'_>], errors: &mut Vec<SyntaxError>) {
    for pair in tokens.windows(2) {
        if let [Token::Op(first), Token::Op(second)] = pair {
            errors.push(SyntaxError::ConsecutiveOperators {
                first: first.keyword(),
                second: second.keyword(),
            });
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;
