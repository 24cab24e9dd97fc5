//! Rendering of the nested outline as list markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::outline::OutlineNode;

const BLOCK_CLASS: &str = "toc-block";
const ENTRY_CLASS: &str = "toc-block__entry";

/// Renders an outline as nested `<ul>` markup.
///
/// Anchored entries become in-page links, anchorless ones plain text.
pub fn render_list(nodes: &[OutlineNode]) -> String {
    let mut out = String::from("<ul>");
    for node in nodes {
        let content = encode_text(&node.heading.content);
        out.push_str("<li>");
        if node.heading.anchor.is_empty() {
            out.push_str(&format!(r#"<span class="{ENTRY_CLASS}">{content}</span>"#));
        } else {
            let anchor = encode_double_quoted_attribute(&node.heading.anchor);
            out.push_str(&format!(
                r##"<a class="{ENTRY_CLASS}" href="#{anchor}">{content}</a>"##
            ));
        }
        if let Some(children) = &node.children {
            out.push_str(&render_list(children));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Renders the outline wrapped in its `<nav>` container, with an
/// optional extra class on the wrapper.
///
/// An empty outline renders as the empty string; no container is
/// emitted for a document without headings.
pub fn render_block(nodes: &[OutlineNode], extra_class: Option<&str>) -> String {
    if nodes.is_empty() {
        return String::new();
    }
    let mut class = BLOCK_CLASS.to_string();
    if let Some(extra) = extra_class {
        class.push(' ');
        class.push_str(extra);
    }
    format!(
        r#"<nav class="{}">{}</nav>"#,
        encode_double_quoted_attribute(&class),
        render_list(nodes)
    )
}
