use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::document::{Document, Node};

/// Node edges.
///
/// Used by [`Document::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element this is the start
    /// tag. In case of the document node the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element this is the end tag.
    /// In case of the document node the end of the document. For any other
    /// values, the end edge occurs immediately after the start edge.
    End(Node),
}

/// ## Read-only access
impl Document {
    /// Check whether a node has been removed from the arena.
    ///
    /// This can happen when you replace the content of a node using
    /// [`Document::set_text_content`] while holding on to a handle to one of
    /// its old children.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let text = document.append_text(document.body(), "Example")?;
    /// document.set_text_content(document.body(), "Changed")?;
    /// assert!(document.is_removed(text));
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn is_removed(&self, node: Node) -> bool {
        self.arena()[node.get()].is_removed()
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if this is the document node or if the node is
    /// unattached to a tree.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// assert_eq!(document.parent(div), None);
    ///
    /// document.append_child(document.body(), div)?;
    /// assert_eq!(document.parent(div), Some(document.body()));
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if this is the first child or the node is
    /// unattached.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Check whether a node has any children.
    pub fn has_child_nodes(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let body = document.body();
    /// let a = document.create_element("a");
    /// let b = document.create_element("b");
    /// document.append_child(body, a)?;
    /// document.append_child(body, b)?;
    ///
    /// let children = document.children(body).collect::<Vec<_>>();
    /// assert_eq!(children, vec![a, b]);
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over of the descendants of this node, including this one.
    /// In document order (pre-order depth-first).
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let a = document.create_element("a");
    /// let b = document.create_element("b");
    /// let c = document.create_element("c");
    /// document.append_child(a, b)?;
    /// document.append_child(b, c)?;
    ///
    /// let descendants = document.descendants(a).collect::<Vec<_>>();
    /// assert_eq!(descendants, vec![a, b, c]);
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    pub fn child_index(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.children(parent).position(|n| n == child)
    }

    /// Traverse over node edges.
    ///
    /// This can be used to traverse the tree in document order iteratively
    /// without the need for recursion, while getting structure information
    /// (unlike [`Document::descendants`] which doesn't retain structure
    /// information).
    ///
    /// For the tree `<a><b></b></a>` this generates a [`NodeEdge::Start`]
    /// for `<a>`, then a [`NodeEdge::Start`] for `<b>`, immediately followed
    /// by a [`NodeEdge::End`] for `<b>`, and finally a [`NodeEdge::End`] for
    /// `<a>`.
    ///
    /// For value types other than containers, the start and end always come
    /// as pairs without any intervening edges.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// The concatenation of all text descendants, in document order.
    ///
    /// Comments contribute nothing. For a text node this is its own data;
    /// for a comment it is the empty string.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let p = document.create_element("p");
    /// document.append_text(p, "hello ")?;
    /// let em = document.create_element("em");
    /// document.append_text(em, "world")?;
    /// document.append_child(p, em)?;
    ///
    /// assert_eq!(document.text_content(p), "hello world");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn text_content(&self, node: Node) -> String {
        let mut content = String::new();
        for descendant in self.descendants(node) {
            if let Some(text) = self.text_str(descendant) {
                content.push_str(text);
            }
        }
        content
    }

    /// Compare two nodes for structural equality.
    ///
    /// Trees are equal when their structure, tag names, attributes, styles
    /// and data are all equal.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let a = document.create_element("div");
    /// document.append_text(a, "Example")?;
    /// let b = document.clone_node(a, true);
    ///
    /// assert!(document.compare(a, b));
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn compare(&self, a: Node, b: Node) -> bool {
        let mut edges_a = self.traverse(a);
        let mut edges_b = self.traverse(b);
        loop {
            match (edges_a.next(), edges_b.next()) {
                (None, None) => return true,
                (Some(edge_a), Some(edge_b)) => match (edge_a, edge_b) {
                    (NodeEdge::Start(node_a), NodeEdge::Start(node_b)) => {
                        if self.value(node_a) != self.value(node_b) {
                            return false;
                        }
                    }
                    (NodeEdge::End(_), NodeEdge::End(_)) => {}
                    _ => return false,
                },
                _ => return false,
            }
        }
    }
}
