//! Tree builder: a cursor state machine over the fragment sequence.
//!
//! Fragments arrive in document order. Comment fragments are skipped, script
//! content is swallowed wholesale, a closing tag that matches the cursor
//! ascends one level, and every other fragment becomes a child of the cursor.
//! Nothing here is fatal: fragments that cannot be handled are skipped and
//! noted, never raised.
//!
//! Known limitations (intentional):
//! - Script detection is a substring check on the pre-`>` region, so
//!   `<div class="script">` enters script mode and its subtree is swallowed.
//! - A closing tag only closes the node the cursor is on; a mismatched
//!   closer such as a stray `/em` becomes a node itself (tag kept verbatim,
//!   leading slash included) and the cursor descends into it.
//! - Only the first fragment of a multi-fragment comment starts with `!`, so
//!   markup inside a comment leaks nodes into the tree.

use crate::diag::{DiagnosticCode, ParseDiagnostic};
use crate::element::{attribute_map, parse_element};
use crate::tokenizer::{Fragment, fragments};
use crate::types::{Element, NodeId, Tree, is_void_element};

/// Builds the element tree for `html`, logging and discarding diagnostics.
pub fn build_tree(html: &str) -> Tree {
    let mut diagnostics = Vec::new();
    let tree = build_tree_with(html, &mut diagnostics);
    for diag in &diagnostics {
        log::debug!(target: "scrape.builder", "recovered parse problem: {diag:?}");
    }
    tree
}

/// Builds the element tree for `html`, pushing diagnostics into the caller's
/// sink. The sink is append-only; existing entries are kept.
pub fn build_tree_with(html: &str, diagnostics: &mut Vec<ParseDiagnostic>) -> Tree {
    let frags = fragments(html);
    let tree = Tree::with_node_capacity(frags.len());
    let mut builder = Builder {
        current: tree.root(),
        in_script: false,
        tree,
    };
    // Fragment 0 is the preamble before the first `<`; it is not markup.
    for frag in &frags[1..] {
        builder.step(frag, diagnostics);
    }
    builder.tree
}

struct Builder {
    tree: Tree,
    current: NodeId,
    in_script: bool,
}

impl Builder {
    fn step(&mut self, frag: &Fragment<'_>, diagnostics: &mut Vec<ParseDiagnostic>) {
        if frag.raw.is_empty() {
            log::debug!(target: "scrape.builder", "empty fragment at byte {}", frag.offset);
            diagnostics.push(ParseDiagnostic {
                code: DiagnosticCode::EmptyFragment,
                position: frag.offset,
            });
            return;
        }
        if frag.raw.starts_with('!') {
            // Comment or doctype. Later fragments of a multi-fragment comment
            // do not start with `!` and are not caught here.
            return;
        }
        if self.in_script {
            if frag.raw.contains("/script") || frag.raw.contains("/noscript") {
                self.in_script = false;
                log::trace!(target: "scrape.builder", "script closed at byte {}", frag.offset);
            }
            // The closing fragment's trailing text is swallowed with the rest.
            return;
        }
        if frag.tag_region().contains("script") {
            self.in_script = true;
            log::trace!(target: "scrape.builder", "script opened at byte {}", frag.offset);
            return;
        }

        if !frag.raw.contains('>') {
            log::trace!(
                target: "scrape.builder",
                "fragment at byte {} has no `>`; treating its text as empty",
                frag.offset
            );
        }
        let text = frag.trailing_text();
        let (tag, attrs) = parse_element(frag.raw);

        // A closing tag only closes the node the cursor is on.
        let cursor_tag = &self.tree.get(self.current).tag;
        if tag.strip_prefix('/').is_some_and(|closed| closed == cursor_tag) {
            // An unmatched closer at the top stays at the root.
            self.current = self
                .tree
                .parent(self.current)
                .unwrap_or_else(|| self.tree.root());
            if !text.is_empty() {
                // Text after a closing tag belongs to the enclosing node.
                self.tree.node_mut(self.current).text.push_str(text);
            }
            return;
        }

        let parent = self.current;
        let mut child = Element::new(tag.to_string(), Some(parent));
        child.attributes = attribute_map(&attrs, frag.offset, diagnostics);
        child.text = text.to_string();
        let id = self.tree.push_child(parent, child);
        // Void elements take no children; the cursor never rests on them.
        self.current = if is_void_element(tag) { parent } else { id };
    }
}
