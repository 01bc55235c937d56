//! Tag and title extraction from note text.
//!
//! Both functions are pure string operations over already-decoded content.

/// Label that introduces the tag line.
pub const TAGS_MARKER: &str = "**Tags:**";

/// Extract tags from the first `**Tags:**` line.
///
/// Everything after the label up to the end of that line is split on `#`;
/// fragments are trimmed and empty ones dropped. `#` is a separator, not a
/// required prefix, so text before the first `#` becomes a tag as well:
/// `**Tags:**intro #alpha` yields `["intro", "alpha"]`.
///
/// Returns an empty list when the note has no tag line.
#[must_use]
pub fn extract_tags(content: &str) -> Vec<String> {
    let Some(start) = content.find(TAGS_MARKER) else {
        return Vec::new();
    };
    let rest = &content[start + TAGS_MARKER.len()..];
    let line = rest.split('\n').next().unwrap_or_default();

    line.split('#')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the title from the first line that starts with `#`.
///
/// The leading `#` run and the whitespace after it are removed, so `# A`
/// and `### A` both give `A`. Returns an empty string when no line starts
/// with `#`.
#[must_use]
pub fn extract_title(content: &str) -> String {
    content
        .lines()
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim_start().to_string())
        .unwrap_or_default()
}
