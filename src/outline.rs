//! Nesting of flat heading lists into an outline tree.

use serde::Serialize;

use crate::heading::HeadingRecord;

/// A heading in the nested outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    /// The heading this node represents.
    pub heading: HeadingRecord,
    /// Position of the heading in the original flat list. Stays stable
    /// through recursion so renderers can key on it.
    pub index: usize,
    /// Sub-headings, or `None` for a leaf. Never `Some` of an empty
    /// list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OutlineNode>>,
}

/// Nests a flat list of headings based on each heading's immediate
/// parent's level.
///
/// Sibling grouping at each depth is defined by the level of the FIRST
/// entry of the slice, not the minimum level in it. A document whose
/// first heading is an `h2` therefore groups the top level at 2, and a
/// later `h1` is not emitted at all. Skipped levels still nest: an
/// `h3` directly after an `h1` becomes its child.
///
/// An entry with empty content stops the walk for the current
/// invocation, truncating everything after it at that depth. Kept for
/// compatibility with the historical behavior; a rework would skip the
/// entry instead.
pub fn linear_to_nested(flat: &[HeadingRecord]) -> Vec<OutlineNode> {
    nest(flat, 0)
}

fn nest(flat: &[HeadingRecord], base_index: usize) -> Vec<OutlineNode> {
    let mut nested = Vec::new();
    let Some(first) = flat.first() else {
        return nested;
    };
    let root_level = first.level;

    for (key, heading) in flat.iter().enumerate() {
        if heading.content.is_empty() {
            break;
        }

        // Only emit entries at the sibling level of this slice; deeper
        // ones are consumed by the child recursion below.
        if heading.level != root_level {
            continue;
        }

        let has_child = flat
            .get(key + 1)
            .is_some_and(|next| next.level > heading.level);

        let children = if has_child {
            // Slice up to the next same-level sibling so the recursion
            // never sees entries that belong to a later branch.
            let end_of_slice = flat[key + 1..]
                .iter()
                .position(|h| h.level == heading.level)
                .map(|offset| key + 1 + offset)
                .unwrap_or(flat.len());
            let kids = nest(&flat[key + 1..end_of_slice], base_index + key + 1);
            // The empty-content stop can leave the recursion with
            // nothing; a childless node carries None, not an empty
            // list.
            (!kids.is_empty()).then_some(kids)
        } else {
            None
        };

        nested.push(OutlineNode {
            heading: heading.clone(),
            index: base_index + key,
            children,
        });
    }

    nested
}
