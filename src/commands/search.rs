//! Search command - run a query against the loaded records

use crate::{
    TagQueryError,
    config::OutputFormat,
    output,
    record::TaggedRecord,
    search::search,
};

type Result<T> = std::result::Result<T, TagQueryError>;

/// Execute the search command
///
/// Returns `false` when the query had syntax errors.
///
/// # Errors
/// Returns an error if JSON output cannot be serialized
pub fn execute(
    records: &[TaggedRecord],
    query: &str,
    format: OutputFormat,
    quiet: bool,
) -> Result<bool> {
    let result = search(records, query);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&output::search_json(&result))?);
        return Ok(result.is_valid);
    }

    if !result.is_valid {
        eprintln!("Invalid query '{query}':");
        for error in &result.errors {
            eprintln!("{}", output::syntax_error(error));
        }
        return Ok(false);
    }

    if result.matched_records.is_empty() {
        if !quiet {
            println!("No records match '{query}'.");
        }
        return Ok(true);
    }

    for (record, highlight) in result.matched_records.iter().zip(&result.highlights) {
        println!("{}", output::record_with_tags(record, &highlight.matching_tags, quiet));
    }
    if !quiet {
        println!("{}", output::match_summary(result.matched_records.len(), records.len()));
    }

    Ok(true)
}
