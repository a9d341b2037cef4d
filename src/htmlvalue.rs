use std::borrow::Cow;
use std::fmt::Debug;

use indexmap::IndexMap;

use crate::style::Style;

/// The type of the node.
///
/// Access it using [`Value::value_type`] or
/// [`Document::value_type`](crate::document::Document::value_type).
///
/// The `ValueType` can be used if you are interested in
/// the type of the value without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document node that holds everything. Note that this is not the same
    /// as the `body` element.
    Document,
    /// Document fragment; a container used to splice children into a tree.
    DocumentFragment,
    /// Element; it has a tag name, attributes and a style map.
    Element,
    /// Text. You can get and set the text value.
    Text,
    /// Comment.
    Comment,
}

impl ValueType {
    /// The DOM numeric code for this node type.
    ///
    /// Elements are `1`, text nodes `3`, comments `8`, documents `9` and
    /// document fragments `11`.
    pub fn code(&self) -> u16 {
        match self {
            ValueType::Element => 1,
            ValueType::Text => 3,
            ValueType::Comment => 8,
            ValueType::Document => 9,
            ValueType::DocumentFragment => 11,
        }
    }
}

/// A node value.
///
/// Access it using [`Document::value`](crate::document::Document::value) or
/// mutably using [`Document::value_mut`](crate::document::Document::value_mut).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document node that holds everything. Note that this is not the same
    /// as the `body` element.
    Document,
    /// Document fragment; a container used to splice children into a tree.
    DocumentFragment,
    /// Element; it has a tag name, attributes and a style map.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the node value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::DocumentFragment => ValueType::DocumentFragment,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
        }
    }

    /// The DOM name for the node: `#document`, `#document-fragment`,
    /// `#text`, `#comment`, or the tag name for elements.
    pub fn node_name(&self) -> &str {
        match self {
            Value::Document => "#document",
            Value::DocumentFragment => "#document-fragment",
            Value::Element(element) => element.name(),
            Value::Text(_) => "#text",
            Value::Comment(_) => "#comment",
        }
    }
}

/// A map of attribute name to value, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// HTML element value.
///
/// Example: `<div/>` or `<div class="intro"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) style: Style,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Attributes::new(),
            style: Style::new(),
        }
    }

    /// The tag name of the element, always lowercase.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored attributes of the element, in insertion order.
    ///
    /// The derived `style` attribute is not stored here; use
    /// [`Element::get_attribute`] or [`Element::style`] to observe it.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    ///
    /// The `style` attribute is derived from the style map: it has a value
    /// exactly when the map is non-empty.
    ///
    /// ```rust
    /// use hot::Document;
    ///
    /// let mut document = Document::new();
    /// let node = document.create_element("div");
    /// let element = document.element_mut(node).unwrap();
    /// element.set_attribute("class", "intro");
    ///
    /// assert_eq!(element.get_attribute("class").as_deref(), Some("intro"));
    /// assert_eq!(element.get_attribute("missing"), None);
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        if name == "style" {
            if self.style.is_empty() {
                return None;
            }
            return Some(Cow::Owned(self.style.to_css_string()));
        }
        self.attributes
            .get(name)
            .map(|value| Cow::Borrowed(value.as_str()))
    }

    /// Check whether an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        if name == "style" {
            return !self.style.is_empty();
        }
        self.attributes.contains_key(name)
    }

    /// Set an attribute value.
    ///
    /// An existing attribute is overwritten in place, keeping its position;
    /// a new attribute is appended at the end. Setting `style` replaces the
    /// style map with the parsed declarations instead of storing the string.
    ///
    /// ```rust
    /// use hot::Document;
    ///
    /// let mut document = Document::new();
    /// let node = document.create_element("div");
    /// let element = document.element_mut(node).unwrap();
    ///
    /// element.set_attribute("style", "color: red; margin: 0;");
    ///
    /// assert_eq!(element.style().get("color"), Some("red"));
    /// assert_eq!(element.style().get("margin"), Some("0"));
    /// ```
    pub fn set_attribute<S: Into<String>>(&mut self, name: &str, value: S) {
        if name == "style" {
            self.style = Style::parse(&value.into());
            return;
        }
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Remove an attribute.
    ///
    /// Removing `style` clears the style map. Removing an absent attribute
    /// is a no-op. The order of the remaining attributes is preserved.
    pub fn remove_attribute(&mut self, name: &str) {
        if name == "style" {
            self.style.clear();
            return;
        }
        self.attributes.shift_remove(name);
    }

    /// The style map of the element.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable access to the style map of the element.
    ///
    /// ```rust
    /// use hot::Document;
    ///
    /// let mut document = Document::new();
    /// let node = document.create_element("div");
    /// let element = document.element_mut(node).unwrap();
    ///
    /// element.style_mut().set("color", "red");
    ///
    /// assert_eq!(element.get_attribute("style").as_deref(), Some("color: red;"));
    /// ```
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// The `id` attribute, or the empty string if it is absent.
    pub fn id(&self) -> &str {
        self.attributes.get("id").map(String::as_str).unwrap_or("")
    }

    /// Set the `id` attribute. An empty value removes the attribute.
    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        let id = id.into();
        if id.is_empty() {
            self.attributes.shift_remove("id");
        } else {
            self.attributes.insert("id".to_string(), id);
        }
    }

    /// The `class` attribute, or the empty string if it is absent.
    pub fn class_name(&self) -> &str {
        self.attributes
            .get("class")
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set the `class` attribute. An empty value removes the attribute.
    pub fn set_class_name<S: Into<String>>(&mut self, class_name: S) {
        let class_name = class_name.into();
        if class_name.is_empty() {
            self.attributes.shift_remove("class");
        } else {
            self.attributes.insert("class".to_string(), class_name);
        }
    }
}

/// Text node value.
///
/// Example: `Bar` in `<p>Bar</p>`, or `hello` and `world` in
/// `<p>hello<br>world</p>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) data: String,
}

impl Text {
    pub(crate) fn new(data: String) -> Self {
        Text { data }
    }

    /// Get the text value.
    ///
    /// See [`Document::text_str`](`crate::Document::text_str`) and
    /// [`Document::text_content`](`crate::Document::text_content`) for more
    /// convenient ways to get text values.
    pub fn get(&self) -> &str {
        &self.data
    }

    /// Set the text value.
    ///
    /// ```rust
    /// use hot::Document;
    ///
    /// let mut document = Document::new();
    /// let p = document.create_element("p");
    /// let text_node = document.append_text(p, "Example")?;
    ///
    /// let text = document.text_mut(text_node).unwrap();
    /// text.set("New text");
    ///
    /// assert_eq!(document.to_string(p), "<p>New text</p>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn set<S: Into<String>>(&mut self, data: S) {
        self.data = data.into();
    }
}

/// Comment node value.
///
/// Example: `<!--foo-->`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub(crate) data: String,
}

impl Comment {
    pub(crate) fn new(data: String) -> Self {
        Comment { data }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.data
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, data: S) {
        self.data = data.into();
    }
}
