use std::borrow::Cow;
use std::io;

use ahash::{HashSet, HashSetExt};
use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::access::NodeEdge;
use crate::document::{Document, Node};
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::htmlvalue::Value;

const VOID_NAMES: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// The fixed set of HTML5 void element names.
///
/// Void elements are serialized as a lone start tag: no children, no end
/// tag.
#[derive(Debug)]
pub(crate) struct HtmlElements {
    void_names: HashSet<String>,
}

impl HtmlElements {
    pub(crate) fn new() -> Self {
        let mut void_names = HashSet::new();
        for name in VOID_NAMES {
            void_names.insert(name.to_string());
        }
        Self { void_names }
    }

    pub(crate) fn is_void(&self, name: &str) -> bool {
        self.void_names.contains(name)
    }
}

/// Output of serialization
///
/// Given an [`OutputToken`], this enum represents what the token represents
/// in the tree.
///
/// You can use this information for customized serialization.
#[derive(Debug, PartialEq)]
pub enum Output<'a> {
    /// Start tag open, i.e. `<div`
    StartTagOpen(&'a str),
    /// Attribute, i.e. `class="intro"`. The derived `style` attribute comes
    /// last.
    Attribute(&'a str, Cow<'a, str>),
    /// Start tag close, i.e. `>`
    StartTagClose,
    /// End tag, i.e. `</div>`. Rendered as the empty string for void
    /// elements.
    EndTag(&'a str),
    /// Text, i.e. `foo`
    Text(&'a str),
    /// Comment, i.e. `<!--foo-->`
    Comment(&'a str),
}

pub(crate) fn gen_outputs(
    document: &Document,
    node: Node,
) -> impl Iterator<Item = (Node, Output)> + '_ {
    gen!({
        // children of a void element produce no output at all
        let mut skip_below: Option<Node> = None;
        for edge in document.traverse(node) {
            match edge {
                NodeEdge::Start(current) => {
                    if skip_below.is_some() {
                        continue;
                    }
                    match document.value(current) {
                        Value::Document | Value::DocumentFragment => {}
                        Value::Element(element) => {
                            yield_!((current, Output::StartTagOpen(element.name())));
                            for (name, value) in element.attributes() {
                                yield_!((
                                    current,
                                    Output::Attribute(name.as_str(), Cow::Borrowed(value.as_str()))
                                ));
                            }
                            if !element.style().is_empty() {
                                yield_!((
                                    current,
                                    Output::Attribute(
                                        "style",
                                        Cow::Owned(element.style().to_css_string())
                                    )
                                ));
                            }
                            yield_!((current, Output::StartTagClose));
                            if document.html_elements.is_void(element.name()) {
                                skip_below = Some(current);
                            }
                        }
                        Value::Text(text) => {
                            yield_!((current, Output::Text(text.get())));
                        }
                        Value::Comment(comment) => {
                            yield_!((current, Output::Comment(comment.get())));
                        }
                    }
                }
                NodeEdge::End(current) => {
                    if let Some(skip) = skip_below {
                        if current != skip {
                            continue;
                        }
                        skip_below = None;
                    }
                    if let Value::Element(element) = document.value(current) {
                        yield_!((current, Output::EndTag(element.name())));
                    }
                }
            }
        }
    })
    .into_iter()
}

/// Output token
///
/// This represents an [`Output`] as a rendered output token.
pub struct OutputToken {
    /// Whether the token is prefixed by a space character.
    pub space: bool,
    /// The token.
    ///
    /// This is a fragment of markup like `<div` or `class="intro"` or `>`.
    pub text: String,
}

pub(crate) struct HtmlSerializer<'a> {
    document: &'a Document,
}

impl<'a> HtmlSerializer<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub(crate) fn serialize<W: io::Write>(
        &self,
        w: &mut W,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
    ) -> Result<(), Error> {
        for (_node, output) in outputs {
            let token = self.render_output(&output);
            if token.space {
                w.write_all(b" ")?;
            }
            w.write_all(token.text.as_bytes())?;
        }
        Ok(())
    }

    pub(crate) fn serialize_to_string(
        &self,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
    ) -> String {
        let mut result = String::new();
        for (_node, output) in outputs {
            let token = self.render_output(&output);
            if token.space {
                result.push(' ');
            }
            result.push_str(&token.text);
        }
        result
    }

    pub(crate) fn render_output(&self, output: &Output<'a>) -> OutputToken {
        use Output::*;
        match output {
            StartTagOpen(name) => OutputToken {
                space: false,
                text: format!("<{}", name),
            },
            Attribute(name, value) => OutputToken {
                space: true,
                text: format!("{}=\"{}\"", name, serialize_attribute(value.clone())),
            },
            StartTagClose => OutputToken {
                space: false,
                text: ">".to_string(),
            },
            EndTag(name) => {
                if self.document.html_elements.is_void(name) {
                    // void elements don't get their end tag, so we just emit
                    // an empty string
                    OutputToken {
                        space: false,
                        text: "".to_string(),
                    }
                } else {
                    OutputToken {
                        space: false,
                        text: format!("</{}>", name),
                    }
                }
            }
            Text(text) => OutputToken {
                space: false,
                text: serialize_text((*text).into()).to_string(),
            },
            Comment(text) => OutputToken {
                space: false,
                text: format!("<!--{}-->", text),
            },
        }
    }
}

/// ## Serialization
impl Document {
    /// Serialize a node to markup, written to a [`io::Write`].
    ///
    /// The document node and document fragments render as the concatenation
    /// of their children.
    pub fn serialize(&self, node: Node, w: &mut impl io::Write) -> Result<(), Error> {
        let serializer = HtmlSerializer::new(self);
        serializer.serialize(w, gen_outputs(self, node))
    }

    /// Serialize a node to a markup string.
    ///
    /// This is the same as [`Document::outer_html`].
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// document.append_text(div, "Example")?;
    ///
    /// assert_eq!(document.to_string(div), "<div>Example</div>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        self.outer_html(node)
    }

    /// The full serialization of the node itself, including its own tags.
    pub fn outer_html(&self, node: Node) -> String {
        let serializer = HtmlSerializer::new(self);
        serializer.serialize_to_string(gen_outputs(self, node))
    }

    /// The concatenation of the serializations of the node's children.
    ///
    /// For leaf nodes this is the empty string.
    ///
    /// ```rust
    /// let mut document = hot::Document::new();
    /// let div = document.create_element("div");
    /// document.append_text(div, "Example")?;
    ///
    /// assert_eq!(document.inner_html(div), "Example");
    /// assert_eq!(document.outer_html(div), "<div>Example</div>");
    /// # Ok::<(), hot::Error>(())
    /// ```
    pub fn inner_html(&self, node: Node) -> String {
        let mut result = String::new();
        for child in self.children(node) {
            result.push_str(&self.outer_html(child));
        }
        result
    }

    /// Get the stream of [`Output`] events that serializing a node produces,
    /// without rendering them.
    pub fn outputs(&self, node: Node) -> impl Iterator<Item = (Node, Output)> + '_ {
        gen_outputs(self, node)
    }

    /// Get the stream of rendered [`OutputToken`]s for a node.
    ///
    /// This can be used for customized serialization: filter or rewrite the
    /// tokens before writing them out.
    pub fn output_tokens(&self, node: Node) -> impl Iterator<Item = (Node, OutputToken)> + '_ {
        let serializer = HtmlSerializer::new(self);
        gen_outputs(self, node).map(move |(node, output)| {
            let token = serializer.render_output(&output);
            (node, token)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_outputs() {
        let mut document = Document::new();
        let div = document.create_element("div");
        let element = document.element_mut(div).unwrap();
        element.set_attribute("a", "A");
        document.append_text(div, "Text").unwrap();

        let mut iter = gen_outputs(&document, div);

        let v = iter.next().unwrap().1;
        assert_eq!(v, Output::StartTagOpen("div"));
        let v = iter.next().unwrap().1;
        assert_eq!(v, Output::Attribute("a", Cow::Borrowed("A")));
        let v = iter.next().unwrap().1;
        assert_eq!(v, Output::StartTagClose);
        let v = iter.next().unwrap().1;
        assert_eq!(v, Output::Text("Text"));
        let v = iter.next().unwrap().1;
        assert_eq!(v, Output::EndTag("div"));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_gen_outputs_void_skips_children() {
        let mut document = Document::new();
        let img = document.create_element("img");
        document.append_text(img, "ignored").unwrap();

        let outputs = gen_outputs(&document, img)
            .map(|(_, output)| output)
            .collect::<Vec<_>>();
        assert_eq!(
            outputs,
            vec![
                Output::StartTagOpen("img"),
                Output::StartTagClose,
                Output::EndTag("img"),
            ]
        );
    }
}
