//! Validate command - report syntax errors without searching

use crate::{
    TagQueryError,
    config::OutputFormat,
    output,
    query::{parse, validate},
};

type Result<T> = std::result::Result<T, TagQueryError>;

/// Execute the validate command
///
/// Returns `false` when the query had syntax errors.
///
/// # Errors
/// Returns an error if JSON output cannot be serialized
pub fn execute(query: &str, format: OutputFormat, quiet: bool) -> Result<bool> {
    let outcome = validate(query);
    let messages = outcome.messages();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output::validation_json(&messages))?);
        }
        OutputFormat::Text if outcome.is_valid => {
            if quiet {
                println!("valid");
            } else {
                match parse(query) {
                    Ok(tree) => println!("valid: {tree}"),
                    Err(e) => println!("valid (parsed with fallback: {e})"),
                }
            }
        }
        OutputFormat::Text => {
            for message in &messages {
                println!("{}", output::syntax_error(message));
            }
        }
    }

    Ok(outcome.is_valid)
}
