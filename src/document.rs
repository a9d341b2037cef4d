use indextree::{Arena, NodeId};

use crate::htmlvalue::{Element, Value};
use crate::serialize::HtmlElements;

pub(crate) type DomArena = Arena<Value>;

/// A node in the document tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Document` struct manages all document tree data in your program. It
/// lets you create, access and manipulate one or more trees of HTML nodes.
///
/// Document is implemented in several sections focusing on different aspects
/// of accessing and manipulating the tree.
pub struct Document {
    pub(crate) arena: DomArena,
    pub(crate) root: Node,
    pub(crate) body: Node,
    pub(crate) html_elements: HtmlElements,
}

impl Document {
    /// Create a new `Document` instance.
    ///
    /// The document starts out with a `#document` node at the top and a
    /// single `body` element underneath it.
    pub fn new() -> Self {
        let mut arena = DomArena::new();
        let root = Node::new(arena.new_node(Value::Document));
        let body = Node::new(arena.new_node(Value::Element(Element::new("body".to_string()))));
        root.get().append(body.get(), &mut arena);
        Document {
            arena,
            root,
            body,
            html_elements: HtmlElements::new(),
        }
    }

    /// The `#document` node at the top of the tree.
    pub fn root(&self) -> Node {
        self.root
    }

    /// The `body` element created with the document.
    ///
    /// ```rust
    /// let document = hot::Document::new();
    ///
    /// let body = document.body();
    /// assert_eq!(document.parent(body), Some(document.root()));
    /// assert_eq!(document.to_string(body), "<body></body>");
    /// ```
    pub fn body(&self) -> Node {
        self.body
    }

    #[inline]
    pub(crate) fn arena(&self) -> &DomArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
