//! Records file loading
//!
//! Records live outside the engine. The CLI reads them from a JSON array or a
//! TOML document with a `[[records]]` table array:
//!
//! ```json
//! [{"id": 1, "tags": ["#breakout", "#morning"]}]
//! ```
//!
//! ```toml
//! [[records]]
//! id = 1
//! tags = ["#breakout", "#morning"]
//! ```

use crate::{TagQueryError, record::TaggedRecord};
use serde::Deserialize;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, TagQueryError>;

#[derive(Deserialize)]
struct TomlRecords {
    #[serde(default)]
    records: Vec<TaggedRecord>,
}

/// Load records from a `.json` or `.toml` file
///
/// # Errors
/// Returns `TagQueryError` if the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_records(path: &Path) -> Result<Vec<TaggedRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => serde_json::from_str(&fs::read_to_string(path)?)?,
        Some("toml") => toml::from_str::<TomlRecords>(&fs::read_to_string(path)?)?.records,
        _ => {
            return Err(TagQueryError::InvalidInput(format!(
                "Unsupported records file '{}': expected .json or .toml",
                path.display()
            )));
        }
    };

    tracing::debug!("loaded records from {}", path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, r##"[{"id": 1, "tags": ["#a", "#b"]}, {"id": 2}]"##).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(
            records,
            vec![
                TaggedRecord::new(1, vec!["#a".into(), "#b".into()]),
                TaggedRecord::new(2, Vec::new()),
            ]
        );
    }

    #[test]
    fn test_load_toml_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.TOML");
        fs::write(&path, "[[records]]\nid = 5\ntags = [\"#x\"]\n").unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records, vec![TaggedRecord::new(5, vec!["#x".into()])]);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.csv");
        fs::write(&path, "id,tags\n").unwrap();
        assert!(matches!(load_records(&path), Err(TagQueryError::InvalidInput(_))));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_records(&path), Err(TagQueryError::JsonError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_records(&path), Err(TagQueryError::IoError(_))));
    }
}
