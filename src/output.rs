//! Output formatting for CLI display
//!
//! Plain string builders; the command modules decide where the text goes.

use crate::record::TaggedRecord;
use crate::search::SearchResult;
use crate::tags::{Tag, normalize};
use colored::Colorize;
use serde_json::{Value, json};

/// Format a matched record with its tags, referenced tags emphasized
#[must_use]
pub fn record_with_tags(record: &TaggedRecord, referenced: &[Tag], quiet: bool) -> String {
    if quiet {
        return record.id.to_string();
    }
    let mut tags: Vec<Tag> = Vec::new();
    for tag in record.tags.iter().map(|raw| normalize(raw)) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if tags.is_empty() {
        return format!("  {} (no tags)", record.id);
    }

    let tags: Vec<String> = tags
        .iter()
        .map(|tag| {
            if referenced.contains(tag) {
                tag.to_string().green().bold().to_string()
            } else {
                tag.to_string()
            }
        })
        .collect();
    format!("  {} [{}]", record.id, tags.join(", "))
}

/// Format a syntax error for display
#[must_use]
pub fn syntax_error(message: &str) -> String {
    format!("  {} {message}", "error:".red().bold())
}

/// Summary line printed after search results
#[must_use]
pub fn match_summary(matched: usize, total: usize) -> String {
    format!("{matched} of {total} record(s) matched")
}

/// JSON document describing a search result
#[must_use]
pub fn search_json(result: &SearchResult<'_, TaggedRecord>) -> Value {
    let matches: Vec<Value> = result
        .matched_records
        .iter()
        .zip(&result.highlights)
        .map(|(record, highlight)| {
            json!({
                "id": record.id,
                "tags": record.tags,
                "highlights": highlight.matching_tags,
            })
        })
        .collect();

    json!({
        "valid": result.is_valid,
        "errors": result.errors,
        "matched_tags": result.matched_tags,
        "matches": matches,
    })
}

/// JSON document describing a validation outcome
#[must_use]
pub fn validation_json(errors: &[String]) -> Value {
    json!({
        "valid": errors.is_empty(),
        "errors": errors,
    })
}
