//! Flat heading records extracted from heading elements.

use scraper::ElementRef;
use serde::Serialize;

/// Anchor, text content, and level of a single heading element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Anchor link target for the heading, or `""` if it has no id.
    pub anchor: String,
    /// Plain text content of the heading. May be empty; empty-content
    /// headings are dropped when the outline is built, not here.
    pub content: String,
    /// Heading level, 1 (`h1`) through 6 (`h6`).
    pub level: u8,
}

impl HeadingRecord {
    /// Builds a record from a heading element.
    ///
    /// Callers must only supply `h1`-`h6` elements; anything else is a
    /// contract violation and panics.
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let tag = element.value().name();
        let level = heading_level(tag)
            .unwrap_or_else(|| panic!("expected an h1-h6 element, got <{tag}>"));

        // The id attribute may contain many ids, so just use the first.
        let anchor = element
            .value()
            .attr("id")
            .and_then(|id| id.trim().split_whitespace().next())
            .unwrap_or("")
            .to_string();

        // All descendant text, concatenated as-is. Trimming or
        // normalizing here would change what the renderer displays.
        let content = element.text().collect::<String>();

        Self {
            anchor,
            content,
            level,
        }
    }
}

/// Maps an `h1`-`h6` tag name to its level.
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Extracts one record per element, preserving input order. No
/// filtering happens at this stage.
pub fn extract<'a, I>(heading_elements: I) -> Vec<HeadingRecord>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    heading_elements
        .into_iter()
        .map(HeadingRecord::from_element)
        .collect()
}
