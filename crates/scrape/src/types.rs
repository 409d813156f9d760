//! Arena-backed element tree.
//!
//! Nodes live in one `Vec`; identity is the slot index wrapped in [`NodeId`].
//! Slot 0 is always a synthetic root tagged `"tree"`, so every real element has
//! a parent and walks have a fixed starting point. The builder appends nodes as
//! it descends, so arena order is document order.

use std::collections::HashMap;

/// Tag of the synthetic root element at slot 0.
pub const ROOT_TAG: &str = "tree";

/// Handle into a [`Tree`] arena.
///
/// Ids are only meaningful on the tree that produced them; indexing a different
/// tree with one may panic or resolve to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One parsed element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name exactly as written in the markup (no case folding). Unmatched
    /// closing tags survive as elements whose tag keeps the leading `/`.
    pub tag: String,
    /// `None` only for the synthetic root.
    pub parent: Option<NodeId>,
    /// Child ids in document order.
    pub children: Vec<NodeId>,
    /// Text that followed this element's opening tag, plus text that followed
    /// closing tags of its children.
    pub text: String,
    /// Parsed attributes; a repeated name keeps the last value.
    pub attributes: HashMap<String, String>,
}

impl Element {
    pub(crate) fn new(tag: String, parent: Option<NodeId>) -> Self {
        Element {
            tag,
            parent,
            children: Vec::new(),
            text: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Attribute value by exact name, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Immutable element tree. Queries only ever need `&Tree`, so a finished tree
/// can be shared across threads as-is.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Element>,
}

impl Tree {
    pub(crate) fn with_node_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Element::new(ROOT_TAG.to_string(), None));
        Tree { nodes }
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: Element) -> NodeId {
        debug_assert_eq!(child.parent, Some(parent));
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(child);
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.index()]
    }

    /// The synthetic root (tag `"tree"`).
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node. Panics if `id` did not come from this tree.
    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.index()]
    }

    /// Number of nodes, root included (never 0).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids in document order (the builder appends depth-first).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }
}

/// Void elements never take children; the builder closes them immediately,
/// and their trailing text stays their own.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "colgroup"
            | "command"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
