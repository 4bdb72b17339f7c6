//! Query auto-completion
//!
//! Suggestions depend on where the user is in the query:
//!
//! - **Empty**: the most used tags
//! - **After an operator** (`#a AND `): the partial query followed by each of
//!   the most used tags
//! - **Mid-query** (`#a AND #br`): completions for the text after the last
//!   operator, with everything around it kept as typed (`(#a AND #br)` keeps
//!   its closing parenthesis)
//! - **Bare prefix** (`#br`): tags containing the prefix
//!
//! Prefix matching is a case-insensitive substring test on the normalized tag
//! without its `#`. Candidates always come out in vocabulary order.
//!
//! Partial queries do not need to be valid.

pub mod vocabulary;

pub use vocabulary::{RankedTag, RankedTags, TagVocabulary};

use crate::query::lexer::Operator;
use crate::record::Tagged;
use crate::tags::normalize;

/// Where the cursor sits in a partial query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorContext<'a> {
    Empty,
    AfterOperator,
    MidQuery { head: &'a str, prefix: &'a str, tail: &'a str },
    Prefix(&'a str),
}

/// Suggest completions using tag usage counted over `records`.
pub fn suggest<R: Tagged>(records: &[R], partial: &str, limit: usize) -> Vec<String> {
    suggest_from(&TagVocabulary::from_records(records), partial, limit)
}

/// Suggest completions from a ranked vocabulary.
///
/// # Examples
/// ```
/// use tagquery::suggest::{TagVocabulary, suggest_from};
/// use tagquery::tags::Tag;
///
/// let vocab = TagVocabulary::from_counts(vec![
///     (Tag::new("breakout"), 4),
///     (Tag::new("reversal"), 2),
/// ]);
/// assert_eq!(suggest_from(&vocab, "#a AND ", 1), vec!["#a AND #breakout"]);
/// assert_eq!(suggest_from(&vocab, "rev", 5), vec!["#reversal"]);
/// ```
pub fn suggest_from(vocabulary: &impl RankedTags, partial: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }
    let ranked = vocabulary.ranked();

    let context = classify(partial);
    tracing::trace!("suggesting for {partial:?} as {context:?}");

    let suggestions: Vec<String> = match context {
        CursorContext::Empty => ranked.iter().take(limit).map(|r| r.tag.to_string()).collect(),
        CursorContext::AfterOperator => {
            let sep = if partial.ends_with(char::is_whitespace) { "" } else { " " };
            ranked
                .iter()
                .take(limit)
                .map(|r| format!("{partial}{sep}{}", r.tag))
                .collect()
        }
        CursorContext::MidQuery { head, prefix, tail } => completions(ranked, prefix, limit)
            .map(|tag| format!("{head}{tag}{tail}"))
            .collect(),
        CursorContext::Prefix(prefix) => completions(ranked, prefix, limit)
            .map(ToString::to_string)
            .collect(),
    };

    tracing::debug!("{} suggestion(s) for {partial:?}", suggestions.len());
    suggestions
}

/// Tags whose body contains the normalized prefix, in ranking order.
fn completions<'v>(
    ranked: &'v [RankedTag],
    prefix: &str,
    limit: usize,
) -> impl Iterator<Item = &'v str> {
    let needle = normalize(prefix).body().to_string();
    ranked
        .iter()
        .filter(move |r| r.tag.body().contains(needle.as_str()))
        .take(limit)
        .map(|r| r.tag.as_str())
}

fn classify(partial: &str) -> CursorContext<'_> {
    let words = words_with_offsets(partial);
    let Some(&(_, last)) = words.last() else {
        return CursorContext::Empty;
    };
    if is_operator(last) {
        return CursorContext::AfterOperator;
    }

    let last_op = words.iter().rposition(|(_, word)| is_operator(word));
    match last_op {
        Some(pos) => {
            // The word after the operator always exists here, since the last word is not one.
            let (rest_start, _) = words[pos + 1];
            let rest = &partial[rest_start..];
            let opened = rest.len() - rest.trim_start_matches('(').len();
            let (head, operand) = partial.split_at(rest_start + opened);
            let prefix = operand.trim_end_matches(|c: char| c == ')' || c.is_whitespace());
            let tail = &operand[prefix.len()..];
            CursorContext::MidQuery { head, prefix, tail }
        }
        None => CursorContext::Prefix(partial),
    }
}

fn is_operator(word: &str) -> bool {
    Operator::from_word(word.trim_start_matches('(')).is_some()
}

/// Whitespace-separated words with their byte offsets.
fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &text[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }
    words
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod suggest_tests;
