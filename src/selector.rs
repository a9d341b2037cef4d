use crate::document::{Document, Node};
use crate::htmlvalue::Element;

/// A single condition an element has to fulfill beyond its tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Condition {
    /// `.foo`: the space-separated class attribute contains `foo`.
    HasClass(String),
    /// `#foo`: the id attribute is exactly `foo`.
    IdEquals(String),
    /// `[foo]`: the attribute `foo` is present.
    HasAttribute(String),
    /// `[foo=bar]`: the attribute `foo` is present with the exact value
    /// `bar`.
    AttributeEquals(String, String),
}

impl Condition {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Condition::HasClass(class) => {
                // only literal spaces separate class names
                let padded = format!(" {} ", element.class_name());
                padded.contains(&format!(" {} ", class))
            }
            Condition::IdEquals(id) => element.id() == *id,
            Condition::HasAttribute(name) => element.has_attribute(name),
            Condition::AttributeEquals(name, value) => {
                element.get_attribute(name).as_deref() == Some(value.as_str())
            }
        }
    }
}

/// A compiled selector: a tag name plus zero or more conditions, all of
/// which have to hold for an element to match.
///
/// The supported grammar is a subset of CSS: an optional tag name (or `*`),
/// followed by any number of `.class`, `#id`, `[attr]` and `[attr=value]`
/// clauses. Combinators are not supported; a selector describes a single
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    tag: String,
    conditions: Vec<Condition>,
}

impl Selector {
    pub(crate) fn parse(selector: &str) -> Selector {
        let selector = selector.trim();
        let tag_end = selector
            .find(&['.', '#', '['][..])
            .unwrap_or(selector.len());
        let tag = &selector[..tag_end];
        let tag = if tag.is_empty() {
            "*".to_string()
        } else {
            tag.to_ascii_lowercase()
        };

        let mut conditions = Vec::new();
        let mut remaining = &selector[tag_end..];
        while let Some(marker) = remaining.chars().next() {
            remaining = &remaining[marker.len_utf8()..];
            match marker {
                '.' => {
                    let (name, rest) = take_name(remaining);
                    if !name.is_empty() {
                        conditions.push(Condition::HasClass(name.to_string()));
                    }
                    remaining = rest;
                }
                '#' => {
                    let (name, rest) = take_name(remaining);
                    if !name.is_empty() {
                        conditions.push(Condition::IdEquals(name.to_string()));
                    }
                    remaining = rest;
                }
                '[' => {
                    let (name, mut rest) = take_name(remaining);
                    if name.is_empty() {
                        remaining = rest;
                        continue;
                    }
                    if let Some(after_equals) = rest.strip_prefix('=') {
                        let value_end = after_equals.find(']').unwrap_or(after_equals.len());
                        let value = &after_equals[..value_end];
                        rest = &after_equals[value_end..];
                        if value.is_empty() {
                            // `[attr=]` degrades to a presence check
                            conditions.push(Condition::HasAttribute(name.to_string()));
                        } else {
                            conditions.push(Condition::AttributeEquals(
                                name.to_string(),
                                value.to_string(),
                            ));
                        }
                    } else {
                        conditions.push(Condition::HasAttribute(name.to_string()));
                    }
                    remaining = rest.strip_prefix(']').unwrap_or(rest);
                }
                _ => {
                    // stray character outside any clause; skip it
                }
            }
        }

        Selector { tag, conditions }
    }

    pub(crate) fn matches(&self, document: &Document, node: Node) -> bool {
        let element = match document.element(node) {
            Some(element) => element,
            None => return false,
        };
        if self.tag != "*" && element.name() != self.tag {
            return false;
        }
        self.conditions
            .iter()
            .all(|condition| condition.matches(element))
    }
}

/// Take an identifier from the start of the input, returning it and the
/// rest of the input.
fn take_name(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(input.len());
    (&input[..end], &input[end..])
}

/// ## Queries
impl Document {
    /// All descendant elements of `scope` matching the selector, in document
    /// order.
    ///
    /// The scope node itself is never included. Passing the document node
    /// queries below the body element.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let body = document.body();
    /// let div = document.create_element("div");
    /// let span = document.create_element("span");
    /// document.element_mut(span).unwrap().set_class_name("x");
    /// document.append_child(body, div)?;
    /// document.append_child(div, span)?;
    ///
    /// assert_eq!(document.query_selector_all(body, "span.x"), vec![span]);
    /// assert_eq!(document.query_selector_all(body, ".missing"), vec![]);
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn query_selector_all(&self, scope: Node, selector: &str) -> Vec<Node> {
        let selector = Selector::parse(selector);
        let scope = self.query_scope(scope);
        self.descendants(scope)
            .skip(1)
            .filter(|node| selector.matches(self, *node))
            .collect()
    }

    /// The first descendant element of `scope` matching the selector, in
    /// document order.
    pub fn query_selector(&self, scope: Node, selector: &str) -> Option<Node> {
        let selector = Selector::parse(selector);
        let scope = self.query_scope(scope);
        self.descendants(scope)
            .skip(1)
            .find(|node| selector.matches(self, *node))
    }

    /// All descendant elements of `scope` with the given tag name, in
    /// document order. `*` matches every element.
    pub fn get_elements_by_tag_name(&self, scope: Node, tag: &str) -> Vec<Node> {
        let tag = tag.to_ascii_lowercase();
        let scope = self.query_scope(scope);
        self.descendants(scope)
            .skip(1)
            .filter(|node| match self.element(*node) {
                Some(element) => tag == "*" || element.name() == tag,
                None => false,
            })
            .collect()
    }

    /// The first element under `scope` (including `scope` itself) whose id
    /// attribute is exactly `id`.
    pub fn get_element_by_id(&self, scope: Node, id: &str) -> Option<Node> {
        let scope = self.query_scope(scope);
        self.descendants(scope)
            .find(|node| match self.element(*node) {
                Some(element) => element.id() == id,
                None => false,
            })
    }

    fn query_scope(&self, scope: Node) -> Node {
        if self.is_document(scope) {
            self.body()
        } else {
            scope
        }
    }
}
