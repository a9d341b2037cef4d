use crate::document::{Document, Node};
use crate::htmlvalue::{Comment, Element, Text, Value};

/// ## Creation
///
/// These are the factory methods for nodes. A new node is unattached; use
/// [`Document::append_child`](crate::Document::append_child) or
/// [`Document::insert_before`](crate::Document::insert_before) to place it
/// in a tree.
impl Document {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new element node. The tag name is lowercased.
    pub fn create_element(&mut self, tag: &str) -> Node {
        let element_node = Value::Element(Element::new(tag.to_ascii_lowercase()));
        self.new_node(element_node)
    }

    /// Create a new text node.
    pub fn create_text_node(&mut self, data: &str) -> Node {
        let text_node = Value::Text(Text::new(data.to_string()));
        self.new_node(text_node)
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, data: &str) -> Node {
        let comment_node = Value::Comment(Comment::new(data.to_string()));
        self.new_node(comment_node)
    }

    /// Create a new empty document fragment.
    pub fn create_document_fragment(&mut self) -> Node {
        self.new_node(Value::DocumentFragment)
    }
}
