//! Tag normalization
//!
//! Every tag that enters the engine, whether it comes from a query or from a
//! record, is reduced to one canonical form before it is compared:
//!
//! - surrounding whitespace is trimmed
//! - the text is lowercased
//! - every character outside `[a-z0-9_]` is dropped (including any `#`)
//! - a single leading `#` is added back
//!
//! Input with nothing left after stripping becomes the canonical empty tag `#`,
//! which never matches anything.
//!
//! # Examples
//!
//! ```
//! use tagquery::tags::normalize;
//!
//! assert_eq!(normalize("  Breakout ").as_str(), "#breakout");
//! assert_eq!(normalize("#Morning-Session").as_str(), "#morningsession");
//! assert!(normalize("!!!").is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every canonical tag
pub const TAG_PREFIX: char = '#';

/// A normalized tag, canonical form `#[a-z0-9_]*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Tag(String);

impl Tag {
    /// Build a tag from raw text, normalizing it.
    pub fn new(raw: impl AsRef<str>) -> Self {
        normalize(raw.as_ref())
    }

    /// The canonical empty tag.
    #[must_use]
    pub fn empty() -> Self {
        Self(TAG_PREFIX.to_string())
    }

    /// True when nothing but the prefix is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.len() == TAG_PREFIX.len_utf8()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag text without its leading `#`.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.0[TAG_PREFIX.len_utf8()..]
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

impl From<String> for Tag {
    fn from(raw: String) -> Self {
        normalize(&raw)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

const fn is_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Canonicalize a raw tag string.
#[must_use]
pub fn normalize(raw: &str) -> Tag {
    let mut canonical = String::with_capacity(raw.len() + 1);
    canonical.push(TAG_PREFIX);
    canonical.extend(raw.trim().to_lowercase().chars().filter(|c| is_tag_char(*c)));
    Tag(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_prefix() {
        assert_eq!(normalize("rust").as_str(), "#rust");
    }

    #[test]
    fn test_normalize_keeps_single_prefix() {
        assert_eq!(normalize("#rust").as_str(), "#rust");
        assert_eq!(normalize("##rust").as_str(), "#rust");
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  #BreakOut\t").as_str(), "#breakout");
    }

    #[test]
    fn test_normalize_strips_illegal_characters() {
        assert_eq!(normalize("#gap-up, big!").as_str(), "#gapupbig");
        assert_eq!(normalize("#snake_case_99").as_str(), "#snake_case_99");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize("#café").as_str(), "#caf");
        assert_eq!(normalize("#日本").as_str(), "#");
    }

    #[test]
    fn test_normalize_empty_inputs() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("#").is_empty());
        assert!(normalize("(*&)").is_empty());
        assert_eq!(normalize(""), Tag::empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["", "#A b", "x-Y_z", "#", "  ##Tag##  ", "ÄÖ", "İstanbul"] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_body() {
        assert_eq!(normalize("#Morning").body(), "morning");
        assert_eq!(Tag::empty().body(), "");
    }

    #[test]
    fn test_serde_normalizes_on_read() {
        let tag: Tag = serde_json::from_str("\"Big Move\"").unwrap();
        assert_eq!(tag.as_str(), "#bigmove");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"#bigmove\"");
    }
}
