use crate::document::{Document, Node};
use crate::htmlvalue::{Comment, Element, Text, Value, ValueType};

/// ## Value access
///
/// Obtain node values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`](crate::htmlvalue::Value) instead.
impl Document {
    /// Access to the value for this node.
    ///
    /// ```rust
    /// use hot::{Document, Value};
    ///
    /// let mut document = Document::new();
    /// let node = document.create_element("div");
    ///
    /// match document.value(node) {
    ///     Value::Element(element) => {
    ///         assert_eq!(element.name(), "div");
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Mutable access to the value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// Get the [`ValueType`](crate::htmlvalue::ValueType) of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The DOM name for the node: `#document`, `#document-fragment`,
    /// `#text`, `#comment`, or the tag name for elements.
    pub fn node_name(&self, node: Node) -> &str {
        self.value(node).node_name()
    }

    /// Return true if the node is the document node.
    pub fn is_document(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Document
    }

    /// Return true if the node is a document fragment.
    pub fn is_document_fragment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::DocumentFragment
    }

    /// Return true if the node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if the node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Return true if the node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// Return true if the node may hold children.
    pub(crate) fn is_container(&self, node: Node) -> bool {
        matches!(
            self.value_type(node),
            ValueType::Document | ValueType::DocumentFragment | ValueType::Element
        )
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        if let Value::Text(text) = self.value(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|n| n.get())
    }

    /// If this node's value is text, return a mutable reference to it.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        if let Value::Text(text) = self.value_mut(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        if let Value::Element(element) = self.value(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node's value is an element, return a mutable reference to it.
    ///
    /// ```rust
    /// use hot::Document;
    ///
    /// let mut document = Document::new();
    /// let node = document.create_element("div");
    ///
    /// let element = document.element_mut(node).unwrap();
    /// element.set_attribute("id", "x");
    ///
    /// assert_eq!(document.to_string(node), r#"<div id="x"></div>"#);
    /// ```
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        if let Value::Element(element) = self.value_mut(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node's value is a comment, return a reference to it.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        if let Value::Comment(comment) = self.value(node) {
            Some(comment)
        } else {
            None
        }
    }

    /// If this node's value is a comment, return a reference to the string.
    pub fn comment_str(&self, node: Node) -> Option<&str> {
        self.comment(node).map(|n| n.get())
    }

    /// If this node's value is a comment, return a mutable reference to it.
    pub fn comment_mut(&mut self, node: Node) -> Option<&mut Comment> {
        if let Value::Comment(comment) = self.value_mut(node) {
            Some(comment)
        } else {
            None
        }
    }
}
