//! Markup parsing and heading queries.
//!
//! Both historical supply modes go through the same query path: a full
//! rendered document (live preview) or a persisted body fragment
//! (server-side render). Embedded frames are dropped before the query
//! so headings inside them are never counted.

use std::sync::OnceLock;

use scraper::{Html, Selector};

use crate::heading::{self, HeadingRecord};

fn heading_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap())
}

fn iframe_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("iframe").unwrap())
}

/// Headings of a full HTML document, in document order.
pub fn headings_in_document(html: &str) -> Vec<HeadingRecord> {
    let mut doc = Html::parse_document(html);
    collect_headings(&mut doc)
}

/// Headings of persisted markup (a body fragment), in document order.
pub fn headings_in_fragment(markup: &str) -> Vec<HeadingRecord> {
    let mut doc = Html::parse_fragment(markup);
    collect_headings(&mut doc)
}

fn collect_headings(doc: &mut Html) -> Vec<HeadingRecord> {
    strip_iframes(doc);
    let records = heading::extract(doc.select(heading_selector()));
    tracing::debug!(count = records.len(), "extracted headings");
    records
}

/// Detaches every iframe subtree so its headings drop out of later
/// selections.
fn strip_iframes(doc: &mut Html) {
    let iframe_ids: Vec<_> = doc.select(iframe_selector()).map(|el| el.id()).collect();
    if iframe_ids.is_empty() {
        return;
    }
    tracing::debug!(count = iframe_ids.len(), "removing iframe subtrees");
    for id in iframe_ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}
