//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for `tagq` using the `clap` crate.
//!
//! # Commands
//!
//! - **search**: Run a query against a records file
//! - **suggest**: Complete a partially typed query
//! - **validate**: Check a query for syntax errors
//!
//! Query words may be passed as separate arguments (`tagq search #a AND #b`)
//! or as one quoted argument; they are joined with single spaces.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagq")]
#[command(about = "Boolean tag queries over tagged records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Records file (.json or .toml); overrides config
    #[arg(short = 'r', long = "records", value_name = "FILE", global = true)]
    pub records: Option<PathBuf>,

    /// Output format; overrides config
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Find records matching a query
    #[command(visible_alias = "s")]
    Search {
        /// Query, e.g. `#breakout AND (NOT #afternoon)`; empty matches everything
        #[arg(value_name = "QUERY", num_args = 0..)]
        query: Vec<String>,
    },

    /// Suggest completions for a partial query
    #[command(visible_alias = "c")]
    Suggest {
        /// Maximum number of suggestions (overrides config)
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,

        /// Partial query as typed so far
        #[arg(value_name = "PARTIAL", num_args = 0..)]
        partial: Vec<String>,
    },

    /// Check a query for syntax errors
    #[command(visible_alias = "v")]
    Validate {
        #[arg(value_name = "QUERY", num_args = 0..)]
        query: Vec<String>,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Whether the command needs a records file
    #[must_use]
    pub const fn needs_records(&self) -> bool {
        matches!(self, Self::Search { .. } | Self::Suggest { .. })
    }

    /// The query or partial text, words joined with spaces
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Search { query } | Self::Validate { query } => query.join(" "),
            Self::Suggest { partial, .. } => partial.join(" "),
        }
    }
}
