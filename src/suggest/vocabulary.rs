//! Ranked tag vocabulary for suggestions

use crate::record::Tagged;
use crate::tags::Tag;
use std::collections::HashMap;

/// A tag together with the number of records using it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTag {
    pub tag: Tag,
    pub count: usize,
}

/// Source of tags ordered from most to least relevant
///
/// The suggestion engine only reads the ordering; how it is produced (usage
/// counts, recency, a cached index) is up to the implementor.
pub trait RankedTags {
    fn ranked(&self) -> &[RankedTag];
}

/// Tag usage counted over a record collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<RankedTag>,
}

impl TagVocabulary {
    /// Count every distinct normalized tag per record.
    ///
    /// Ordered by count descending, ties broken alphabetically.
    pub fn from_records<R: Tagged>(records: &[R]) -> Self {
        let mut counts: HashMap<Tag, usize> = HashMap::new();
        for record in records {
            for tag in record.normalized_tags() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        Self::from_counts(counts)
    }

    /// Build from precomputed counts; empty tags are dropped.
    pub fn from_counts(counts: impl IntoIterator<Item = (Tag, usize)>) -> Self {
        let mut tags: Vec<RankedTag> = counts
            .into_iter()
            .filter(|(tag, _)| !tag.is_empty())
            .map(|(tag, count)| RankedTag { tag, count })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        Self { tags }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl RankedTags for TagVocabulary {
    fn ranked(&self) -> &[RankedTag] {
        &self.tags
    }
}
