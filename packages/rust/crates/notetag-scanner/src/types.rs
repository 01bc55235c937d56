//! Note record type.

/// Tags and title extracted from one note file.
///
/// `path` is the link target used in the index document: relative to the
/// document's directory, `/`-separated, without a leading `./`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteRecord {
    /// Relative path to the note
    pub path: String,
    /// First heading, or empty when the note has none
    pub title: String,
    /// Tags in the order they appear on the tag line
    pub tags: Vec<String>,
}

impl NoteRecord {
    /// Create a record with no tags.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            tags: Vec::new(),
        }
    }

    /// Add tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

