//! Section renderer: [`TagIndex`] → collapsible markdown block.

use std::path::Path;

use notetag_scanner::NOTE_EXTENSION;

use crate::aggregate::{TagEntry, TagIndex};

/// Heading emitted at the top of every rendered section.
pub const SECTION_HEADING: &str = "### 📌 Tags";

const SUMMARY_STYLE: [&str; 6] = [
    "<style>",
    "summary.tag-summary {",
    "  font-size: 1.3em;",
    "  font-weight: bold;",
    "  margin: 1em 0;",
    "}",
];

/// Knobs for the rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text appended to the file count in each summary (`3개`)
    pub count_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            count_label: "개".to_string(),
        }
    }
}

fn link_label(path: &str) -> &str {
    let name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);
    name.strip_suffix(NOTE_EXTENSION).unwrap_or(name)
}

fn entry_line(entry: &TagEntry) -> String {
    format!(
        "- [{}]({}) {}",
        link_label(&entry.path),
        entry.path,
        entry.title
    )
}

/// Render the tag section.
///
/// Layout: heading, a `<style>` block for the summaries, then one
/// `<details>` block per tag in byte order, each followed by a blank line.
/// An empty index renders the heading and style block only.
#[must_use]
pub fn render_tag_section(index: &TagIndex, options: &RenderOptions) -> String {
    let mut lines: Vec<String> = vec![format!("{SECTION_HEADING}\n")];
    lines.extend(SUMMARY_STYLE.iter().map(|line| (*line).to_string()));
    lines.push("</style>\n".to_string());

    for (tag, entries) in index.iter() {
        lines.push("<details>".to_string());
        lines.push(format!(
            "<summary class=\"tag-summary\">{tag} <code>{}{}</code></summary>",
            entries.len(),
            options.count_label
        ));
        lines.push(String::new());
        lines.extend(entries.iter().map(entry_line));
        lines.push("</details>".to_string());
        lines.push(String::new());
    }

    tracing::debug!(tags = index.len(), "rendered tag section");
    lines.join("\n")
}
