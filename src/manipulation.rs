use crate::document::{Document, Node};
use crate::error::Error;

/// ## Manipulation
///
/// These methods maintain the tree structure:
///
/// - Only containers (elements, document fragments and the document node)
///   can have children.
/// - The document node cannot be moved.
/// - A node is in at most one child list: inserting an attached node
///   detaches it from its old parent first.
/// - Inserting a document fragment splices its children into the target and
///   leaves the fragment itself empty and unattached.
impl Document {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If the child is attached elsewhere it is moved. Returns the inserted
    /// node.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// document.append_child(document.body(), div)?;
    ///
    /// assert_eq!(document.to_string(document.body()), "<body><div></div></body>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn append_child(&mut self, parent: Node, child: Node) -> Result<Node, Error> {
        self.insert_before(parent, child, None)
    }

    /// Append a text node to a parent node given a string.
    ///
    /// Returns the new text node.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text_node = self.create_text_node(text);
        self.append_child(parent, text_node)
    }

    /// Insert a child into the children of the given parent, immediately
    /// before the reference node, or at the end if the reference is [`None`].
    ///
    /// A document fragment child is not inserted itself: its children are
    /// moved one at a time, in order, and the fragment is left empty. If the
    /// child is attached elsewhere it is detached from its old parent first;
    /// moving a node is never an error.
    ///
    /// Fails with [`Error::NotFound`] if the reference node is not a direct
    /// child of the parent. Returns the inserted node.
    pub fn insert_before(
        &mut self,
        parent: Node,
        child: Node,
        reference: Option<Node>,
    ) -> Result<Node, Error> {
        self.add_structure_check(parent, child)?;
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(Error::NotFound(reference));
            }
            // inserting a node before itself leaves it in place
            if reference == child {
                return Ok(child);
            }
        }
        if self.is_document_fragment(child) {
            let mut fragment_child = self.first_child(child);
            while let Some(node) = fragment_child {
                fragment_child = self.next_sibling(node);
                self.insert_node(parent, node, reference)?;
            }
            return Ok(child);
        }
        self.insert_node(parent, child, reference)?;
        Ok(child)
    }

    fn insert_node(&mut self, parent: Node, child: Node, reference: Option<Node>) -> Result<(), Error> {
        if self.parent(child).is_some() {
            child.get().detach(self.arena_mut());
        }
        match reference {
            Some(reference) => reference
                .get()
                .checked_insert_before(child.get(), self.arena_mut())?,
            None => parent.get().checked_append(child.get(), self.arena_mut())?,
        }
        Ok(())
    }

    /// Remove a child from the children of the given parent.
    ///
    /// Fails with [`Error::NotFound`] if the node is not a direct child.
    /// Returns the removed node, which stays alive as a detached subtree.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// document.append_child(document.body(), div)?;
    ///
    /// let removed = document.remove_child(document.body(), div)?;
    /// assert_eq!(removed, div);
    /// assert_eq!(document.parent(div), None);
    /// assert_eq!(document.to_string(document.body()), "<body></body>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn remove_child(&mut self, parent: Node, child: Node) -> Result<Node, Error> {
        if self.parent(child) != Some(parent) {
            return Err(Error::NotFound(child));
        }
        child.get().detach(self.arena_mut());
        Ok(child)
    }

    /// Insert a child immediately before the reference node, then remove the
    /// reference node.
    ///
    /// Fails with [`Error::NotFound`] if the reference node is not a direct
    /// child of the parent. Returns the removed reference node.
    pub fn replace_child(
        &mut self,
        parent: Node,
        child: Node,
        reference: Node,
    ) -> Result<Node, Error> {
        self.insert_before(parent, child, Some(reference))?;
        self.remove_child(parent, reference)?;
        Ok(reference)
    }

    /// Replace all children of a container with a single text node holding
    /// the given string.
    ///
    /// The old children are destroyed; handles to them report
    /// [`Document::is_removed`]. Fails with [`Error::InvalidOperation`] for
    /// text and comment nodes; use [`Text::set`](crate::Text::set) and
    /// [`Comment::set`](crate::Comment::set) for those.
    pub fn set_text_content(&mut self, node: Node, text: &str) -> Result<(), Error> {
        if !self.is_container(node) {
            return Err(Error::InvalidOperation(
                "Cannot set text content of a text or comment node".into(),
            ));
        }
        let children = self.children(node).collect::<Vec<_>>();
        for child in children {
            child.get().remove_subtree(self.arena_mut());
        }
        let text_node = self.create_text_node(text);
        node.get()
            .checked_append(text_node.get(), self.arena_mut())?;
        Ok(())
    }

    /// Clone a node into a new unattached node of the same variant.
    ///
    /// For elements the tag name, attributes and style are copied; for text
    /// and comments the data. If `deep` is true the children are cloned
    /// recursively, otherwise the clone starts childless.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// document.append_text(div, "Example")?;
    ///
    /// let shallow = document.clone_node(div, false);
    /// let deep = document.clone_node(div, true);
    /// assert!(!document.has_child_nodes(shallow));
    /// assert_eq!(document.to_string(deep), "<div>Example</div>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn clone_node(&mut self, node: Node, deep: bool) -> Node {
        let value = self.value(node).clone();
        let clone = self.new_node(value);
        if deep {
            self.clone_children(node, clone);
        }
        clone
    }

    fn clone_children(&mut self, source: Node, target: Node) {
        let children = self.children(source).collect::<Vec<_>>();
        for child in children {
            let value = self.value(child).clone();
            let child_clone = self.new_node(value);
            // fresh nodes cannot introduce a cycle
            target.get().append(child_clone.get(), self.arena_mut());
            self.clone_children(child, child_clone);
        }
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !self.is_container(parent) {
            return Err(Error::InvalidOperation(
                "Cannot add children to a text or comment node".into(),
            ));
        }
        if self.is_document(child) {
            return Err(Error::InvalidOperation(
                "Cannot move the document node".into(),
            ));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::InvalidOperation(
                "Cannot insert a node inside its own subtree".into(),
            ));
        }
        Ok(())
    }
}
