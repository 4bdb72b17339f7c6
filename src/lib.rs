//! Tagquery - a boolean tag-query engine
//!
//! This library validates, parses and evaluates AND/OR/NOT queries over tagged
//! records, highlights the tags that drove a match, and suggests completions
//! for partially typed queries. Every engine operation is a pure function over
//! borrowed input.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod highlight;
pub mod output;
pub mod query;
pub mod record;
pub mod search;
pub mod suggest;
pub mod tags;

#[cfg(test)]
pub mod testing;

pub use highlight::{Highlight, highlights};
pub use query::{QueryNode, ValidationOutcome, evaluate, parse, validate};
pub use record::{Tagged, TaggedRecord};
pub use search::{SearchResult, search};
pub use suggest::{TagVocabulary, suggest};
pub use tags::{Tag, normalize};

/// Error enum, contains all failure states of the `tagq` program
#[derive(Debug, Error)]
pub enum TagQueryError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Records file is not valid JSON
    #[error("Invalid JSON records: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Records file is not valid TOML
    #[error("Invalid TOML records: {0}")]
    TomlError(#[from] toml::de::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
