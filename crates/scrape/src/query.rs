//! Tag and attribute search over a finished tree.

use crate::types::{NodeId, Tree};

impl Tree {
    /// Collects every node whose tag equals `tag` and whose attribute map
    /// contains every requested `(name, value)` pair, in pre-order.
    ///
    /// Matching is verbatim on both tags and attribute values; extra
    /// attributes on a node never disqualify it. An empty `attrs` matches on
    /// tag alone. No match is an empty vector, never an error.
    pub fn find_by_tag_and_attrs(&self, tag: &str, attrs: &[(&str, &str)]) -> Vec<NodeId> {
        self.find_from(self.root(), tag, attrs)
    }

    /// Same search, restricted to the subtree rooted at `start` (inclusive).
    pub fn find_from(&self, start: NodeId, tag: &str, attrs: &[(&str, &str)]) -> Vec<NodeId> {
        let mut out = Vec::new();
        // Children go on the stack in reverse so they pop in document order;
        // the walk's depth lives on the heap, not the call stack, because
        // input nesting is unbounded.
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.get(id);
            if node.tag == tag
                && attrs
                    .iter()
                    .all(|(name, value)| node.attr(name) == Some(*value))
            {
                out.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// First node with `tag` in pre-order, or `None`.
    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.nodes().find(|&id| self.get(id).tag == tag)
    }

    /// The first `body` element, when the document has one.
    pub fn body(&self) -> Option<NodeId> {
        self.first_by_tag("body")
    }
}
