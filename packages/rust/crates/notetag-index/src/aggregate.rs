//! Tag aggregation.

use std::collections::BTreeMap;

use notetag_scanner::NoteRecord;
use serde::Serialize;

/// One note listed under a tag.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagEntry {
    /// Link target of the note
    pub path: String,
    /// Note title (may be empty)
    pub title: String,
}

/// Tag → notes carrying that tag.
///
/// Tags iterate in byte order; entries under a tag keep the order the notes
/// were inserted in. A note is listed under a given tag at most once.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<TagEntry>>,
}

impl TagIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold records into a fresh index, in iteration order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a NoteRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Add one record under each of its tags.
    pub fn insert(&mut self, record: &NoteRecord) {
        for tag in &record.tags {
            let entries = self.tags.entry(tag.clone()).or_default();
            if entries.iter().any(|entry| entry.path == record.path) {
                continue;
            }
            entries.push(TagEntry {
                path: record.path.clone(),
                title: record.title.clone(),
            });
        }
    }

    /// Entries for `tag`, if any note carries it.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[TagEntry]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    /// Iterate tags in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TagEntry])> {
        self.tags
            .iter()
            .map(|(tag, entries)| (tag.as_str(), entries.as_slice()))
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no note carried any tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// `(tag, file count)` pairs in byte order.
    #[must_use]
    pub fn stats(&self) -> Vec<(String, usize)> {
        self.iter()
            .map(|(tag, entries)| (tag.to_string(), entries.len()))
            .collect()
    }
}
