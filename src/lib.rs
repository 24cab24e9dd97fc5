//! Table-of-contents generation for rendered HTML.
//!
//! The pipeline has three stages: parse markup and query its heading
//! elements ([`document`]), map each element to a flat
//! [`heading::HeadingRecord`], and nest the flat list into an outline
//! tree ([`outline`]). [`render`] turns the tree back into nested
//! list markup for display.

pub mod document;
pub mod heading;
pub mod outline;
pub mod render;

/// Full pipeline: persisted markup in, rendered table of contents out.
///
/// Returns the empty string when the markup contains no headings; a
/// missing table of contents is not an error.
pub fn render_table_of_contents(markup: &str, extra_class: Option<&str>) -> String {
    let headings = document::headings_in_fragment(markup);
    let nested = outline::linear_to_nested(&headings);
    render::render_block(&nested, extra_class)
}
