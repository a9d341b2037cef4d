//! A fixed representation of a tree of nodes.
//!
//! Document trees are mutable, but it is useful to have a fixed
//! representation of a subtree that you can create and store separately.
//! This has no dependency on the [`Document`] object. You can turn the fixed
//! representation into real nodes by calling `.domify` on it and passing a
//! mutable [`Document`].
//!
//! Example:
//!
//! ```rust
//! use hot::fixed;
//!
//! let fixed_element = fixed::Element {
//!     name: "p".to_string(),
//!     attributes: vec![("class".to_string(), "intro".to_string())],
//!     children: vec![fixed::Content::Text("Example".to_string())],
//! };
//!
//! let mut document = hot::Document::new();
//! let node = fixed_element.domify(&mut document);
//! assert_eq!(document.to_string(node), r#"<p class="intro">Example</p>"#);
//! ```

use crate::document::{Document, Node};

/// A fixed representation of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Tag name of element
    pub name: String,
    /// Attributes, in order
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Content>,
}

/// A fixed representation of element content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// A text node
    Text(String),
    /// A comment node
    Comment(String),
    /// An element node
    Element(Element),
}

impl Element {
    /// Turn a fixed element into a document node.
    ///
    /// The new subtree is not attached anywhere yet; append it where you
    /// want it.
    pub fn domify(&self, document: &mut Document) -> Node {
        let element_node = document.create_element(&self.name);
        let element = document.element_mut(element_node).unwrap();
        for (name, value) in &self.attributes {
            element.set_attribute(name, value.as_str());
        }
        let children = self
            .children
            .iter()
            .map(|child| child.domify(document))
            .collect::<Vec<_>>();
        for child in children {
            document.append_child(element_node, child).unwrap();
        }
        element_node
    }
}

impl Content {
    /// Turn fixed content into a document node
    fn domify(&self, document: &mut Document) -> Node {
        match self {
            Content::Text(text) => document.create_text_node(text),
            Content::Comment(comment) => document.create_comment(comment),
            Content::Element(element) => element.domify(document),
        }
    }
}
