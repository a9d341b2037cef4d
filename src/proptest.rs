//! Proptest support for hot
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. hot helps you write a proptest by letting you
//! generate an arbitrary document tree.
//!
//! This can be enabled by adding the `proptest` feature to your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hot = { version = "0.2", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{Content, Element};

const ELEMENT_NAMES: &[&str] = &["a", "b", "div", "span", "p"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const TEXT: &str = "[ -~]{0,12}";

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), "[a-zA-Z0-9 ]{0,8}")
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn arb_comment() -> impl Strategy<Value = String> {
    TEXT.prop_filter("comment", |s| !s.contains("--"))
}

fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        TEXT.prop_map(Content::Text),
        arb_comment().prop_map(Content::Comment),
    ];

    leaf.prop_recursive(
        4,  // levels deep
        32, // maximum size of 32 nodes
        4,  // up to 4 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(inner, 0..4),
                prop::collection::vec(arb_attribute(), 0..3),
            )
                .prop_map(|(name, children, attributes)| {
                    Content::Element(Element {
                        name: name.to_string(),
                        attributes: unduplicate_attributes(attributes.as_slice()),
                        children,
                    })
                })
        },
    )
}

prop_compose! {
    /// Generate a random element tree.
    ///
    /// This produces a value that can be converted into document nodes using
    /// its [`domify`](crate::fixed::Element::domify) method.
    ///
    /// Example:
    ///
    /// ```notrust
    /// use hot::proptest::arb_element;
    /// use hot::Document;
    ///
    /// proptest! {
    ///   #[test]
    ///   fn test_serialized_trees_are_not_empty(fixed in arb_element()) {
    ///     let mut document = Document::new();
    ///     let node = fixed.domify(&mut document);
    ///     prop_assert!(!document.to_string(node).is_empty());
    ///   }
    /// }
    /// ```
    pub fn arb_element()(name in prop::sample::select(ELEMENT_NAMES),
                         children in prop::collection::vec(arb_content(), 0..4),
                         attributes in prop::collection::vec(arb_attribute(), 0..3)) -> Element {
        Element {
            name: name.to_string(),
            attributes: unduplicate_attributes(attributes.as_slice()),
            children,
        }
    }
}

fn unduplicate_attributes(attributes: &[(String, String)]) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .cloned()
        .collect()
}
