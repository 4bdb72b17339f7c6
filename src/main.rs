//! Tagq CLI application entry point
//!
//! A thin shell around the tagquery engine: it loads records from a file and
//! runs queries, suggestions and validation against them.
//!
//! # Usage
//!
//! ```bash
//! # Find records matching a query
//! tagq --records journal.json search '#breakout AND (NOT #afternoon)'
//!
//! # Complete a partial query
//! tagq -r journal.json suggest -n 3 '#breakout AND #mo'
//!
//! # Check a query without searching
//! tagq validate '(#a OR #b'
//!
//! # Machine-readable output
//! tagq -r journal.json --format json search '#a OR #b'
//! ```
//!
//! # Configuration
//!
//! Defaults come from `~/.config/tagq/config.toml` (Linux) and `TAGQ_*`
//! environment variables; see `tagquery::config`. Set `RUST_LOG=debug` to see
//! engine tracing on stderr.

use std::path::PathBuf;
use tagquery::{
    TagQueryError,
    cli::{Cli, Commands},
    commands,
    config::TagqConfig,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, TagQueryError>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn records_path(cli: &Cli, config: &TagqConfig) -> Result<PathBuf> {
    cli.records
        .clone()
        .or_else(|| config.records_file.clone())
        .ok_or_else(|| {
            TagQueryError::InvalidInput(
                "No records file given. Use --records <FILE> or set records_file in the config.".into(),
            )
        })
}

fn run(cli: &Cli, config: &TagqConfig) -> Result<bool> {
    let quiet = cli.quiet || config.quiet;
    let format = cli.format.unwrap_or(config.format);
    let text = cli.command.text();

    let records = if cli.command.needs_records() {
        commands::load_records(&records_path(cli, config)?)?
    } else {
        Vec::new()
    };

    match &cli.command {
        Commands::Search { .. } => commands::search(&records, &text, format, quiet),
        Commands::Suggest { limit, .. } => {
            let limit = limit.unwrap_or(config.suggestion_limit);
            commands::suggest(&records, &text, limit, format, quiet)
        }
        Commands::Validate { .. } => commands::validate(&text, format, quiet),
    }
}

/// Parse arguments, then load configuration.
///
/// `--help` and `--version` exit inside `parse`, before a broken config file
/// or `TAGQ_*` variable can fail the load.
fn startup(
    parse: impl FnOnce() -> Cli,
    load: impl FnOnce() -> Result<TagqConfig>,
) -> Result<(Cli, TagqConfig)> {
    let cli = parse();
    let config = load()?;
    Ok((cli, config))
}

fn main() -> Result<()> {
    init_tracing();

    let (cli, config) = startup(Cli::parse_args, || Ok(TagqConfig::load()?))?;

    if !run(&cli, &config)? {
        std::process::exit(1);
    }
    Ok(())
}
