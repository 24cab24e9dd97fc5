//! End-to-end tests for the markup -> outline -> markup pipeline.

use serde_json::json;
use tocgen::{document, outline, render, render_table_of_contents};

/// A small post body: anchored and anchorless headings, a skipped
/// level, and an iframe whose headings must not count.
const POST_MARKUP: &str = "\
    <h2 id=\"intro\">Introduction</h2>\
    <p>Some prose.</p>\
    <h3 id=\"setup steps\">Setup</h3>\
    <h4>Details</h4>\
    <iframe src=\"https://example.com/embed\"><h2>Embedded</h2></iframe>\
    <h2>Closing</h2>";

#[test]
fn test_full_pipeline_markup() {
    let out = render_table_of_contents(POST_MARKUP, None);
    assert_eq!(
        out,
        "<nav class=\"toc-block\"><ul>\
         <li><a class=\"toc-block__entry\" href=\"#intro\">Introduction</a>\
         <ul><li><a class=\"toc-block__entry\" href=\"#setup\">Setup</a>\
         <ul><li><span class=\"toc-block__entry\">Details</span></li></ul>\
         </li></ul></li>\
         <li><span class=\"toc-block__entry\">Closing</span></li>\
         </ul></nav>"
    );
}

#[test]
fn test_full_pipeline_json() {
    let headings = document::headings_in_fragment(POST_MARKUP);
    let nested = outline::linear_to_nested(&headings);
    let value = serde_json::to_value(&nested).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "heading": { "anchor": "intro", "content": "Introduction", "level": 2 },
                "index": 0,
                "children": [
                    {
                        "heading": { "anchor": "setup", "content": "Setup", "level": 3 },
                        "index": 1,
                        "children": [
                            {
                                "heading": { "anchor": "", "content": "Details", "level": 4 },
                                "index": 2
                            }
                        ]
                    }
                ]
            },
            {
                "heading": { "anchor": "", "content": "Closing", "level": 2 },
                "index": 3
            }
        ])
    );
}

#[test]
fn test_document_and_fragment_modes_agree() {
    let wrapped = format!("<html><head><title>:D</title></head><body>{POST_MARKUP}</body></html>");
    assert_eq!(
        document::headings_in_document(&wrapped),
        document::headings_in_fragment(POST_MARKUP)
    );
}

#[test]
fn test_headingless_post_renders_nothing() {
    assert_eq!(render_table_of_contents("<p>Nothing to list.</p>", None), "");
}

#[test]
fn test_extra_class_reaches_wrapper() {
    let out = render_table_of_contents("<h2 id=\"a\">A</h2>", Some("align-wide"));
    assert!(out.starts_with("<nav class=\"toc-block align-wide\">"));
}

#[test]
fn test_render_block_of_empty_outline_is_empty() {
    assert_eq!(render::render_block(&[], Some("align-wide")), "");
}
