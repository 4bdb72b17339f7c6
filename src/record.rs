//! Tagged records
//!
//! The engine does not own records. Anything that can hand out an identity and a
//! list of raw tag strings can be searched by implementing [`Tagged`].

use crate::tags::{Tag, normalize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;

/// A record that carries tags
pub trait Tagged {
    /// Identity reported back in highlights
    type Id: Clone + Eq + Debug;

    fn id(&self) -> Self::Id;

    /// Raw tag strings; the engine normalizes them when reading.
    fn tags(&self) -> &[String];

    /// Distinct normalized tags of this record, empty tags dropped.
    fn normalized_tags(&self) -> HashSet<Tag> {
        self.tags()
            .iter()
            .map(|raw| normalize(raw))
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// Stock record type: a numeric id plus its tags
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaggedRecord {
    pub id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TaggedRecord {
    /// Create a new record
    #[must_use]
    pub const fn new(id: u64, tags: Vec<String>) -> Self {
        Self { id, tags }
    }
}

impl Tagged for TaggedRecord {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_tags_dedupes_and_drops_empty() {
        let record = TaggedRecord::new(
            7,
            vec!["Breakout".into(), "#breakout".into(), "???".into(), "gap up".into()],
        );
        let tags = record.normalized_tags();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::new("breakout")));
        assert!(tags.contains(&Tag::new("gapup")));
    }

    #[test]
    fn test_deserialize_without_tags() {
        let record: TaggedRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(record, TaggedRecord::new(3, Vec::new()));
    }
}
