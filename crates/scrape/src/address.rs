//! Slash-delimited path lookups, a deliberately small cousin of XPath.
//!
//! A path like `body/div[1]/@text` walks direct children only: `div[1]` is
//! the second `div` among the cursor's children, and the `@` segment ends the
//! walk. Unresolvable segments never fail the walk; the cursor just stays
//! where it is.

use crate::types::{NodeId, Tree};

/// Result of a path walk: the terminal marker picks text or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathValue<'a> {
    Text(&'a str),
    Element(NodeId),
}

impl Tree {
    /// Walks a `/`-delimited path from the root.
    /// See [`Tree::get_by_address_from`] for the segment grammar.
    pub fn get_by_address(&self, address: &str) -> Option<PathValue<'_>> {
        self.get_by_address_from(self.root(), address)
    }

    /// Walks a `/`-delimited path from `start`.
    ///
    /// Segment forms, checked in this order:
    /// - contains `@`: terminal. `text` anywhere in the segment returns the
    ///   cursor's text, `element` returns the cursor itself, anything else
    ///   skips the segment;
    /// - `tag[n]`: the n-th direct child with that tag (0-based among the
    ///   matching children only); a malformed or out-of-range index logs a
    ///   warning and leaves the cursor unchanged;
    /// - bare tag: the first direct child with that tag, silently staying put
    ///   when there is none.
    ///
    /// A path that ends without a terminal marker resolves to `None`.
    pub fn get_by_address_from(&self, start: NodeId, address: &str) -> Option<PathValue<'_>> {
        let mut current = start;
        for segment in address.split('/') {
            if segment.contains('@') {
                if segment.contains("text") {
                    return Some(PathValue::Text(&self.get(current).text));
                }
                if segment.contains("element") {
                    return Some(PathValue::Element(current));
                }
                continue;
            }
            if let Some(bracket) = segment.find('[') {
                let tag = &segment[..bracket];
                let index_text = segment[bracket + 1..].split(']').next().unwrap_or("");
                match index_text.parse::<usize>() {
                    Ok(index) => {
                        let hit = self
                            .children(current)
                            .iter()
                            .copied()
                            .filter(|&child| self.get(child).tag == tag)
                            .nth(index);
                        match hit {
                            Some(child) => current = child,
                            None => log::warn!(
                                target: "scrape.address",
                                "index {index} out of range for tag {tag:?} in segment {segment:?}"
                            ),
                        }
                    }
                    Err(_) => log::warn!(
                        target: "scrape.address",
                        "segment {segment:?} has no usable index"
                    ),
                }
                continue;
            }
            if let Some(child) = self
                .children(current)
                .iter()
                .copied()
                .find(|&child| self.get(child).tag == segment)
            {
                current = child;
            }
        }
        None
    }
}
