//! Suggest command - complete a partially typed query

use crate::{
    TagQueryError,
    config::OutputFormat,
    record::TaggedRecord,
    suggest::suggest,
};

type Result<T> = std::result::Result<T, TagQueryError>;

/// Execute the suggest command
///
/// # Errors
/// Returns an error if JSON output cannot be serialized
pub fn execute(
    records: &[TaggedRecord],
    partial: &str,
    limit: usize,
    format: OutputFormat,
    quiet: bool,
) -> Result<bool> {
    let suggestions = suggest(records, partial, limit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
        OutputFormat::Text if suggestions.is_empty() => {
            if !quiet {
                println!("No suggestions for '{partial}'.");
            }
        }
        OutputFormat::Text => {
            for suggestion in &suggestions {
                println!("{suggestion}");
            }
        }
    }

    Ok(true)
}
