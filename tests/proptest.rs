use hot::fixed::{Content, Element};
use hot::Document;
use proptest::prelude::*;

const ELEMENT_NAMES: &[&str] = &["a", "b", "div", "span", "p"];
const TEXT: &str = "[ -~]{0,12}";

fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = TEXT.prop_map(Content::Text);
    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            prop::sample::select(ELEMENT_NAMES),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, children)| {
                Content::Element(Element {
                    name: name.to_string(),
                    attributes: vec![],
                    children,
                })
            })
    })
}

prop_compose! {
    fn arb_element()(name in prop::sample::select(ELEMENT_NAMES),
                     children in prop::collection::vec(arb_content(), 0..3)) -> Element {
        Element {
            name: name.to_string(),
            attributes: vec![],
            children,
        }
    }
}

fn expected_text(content: &Content) -> String {
    match content {
        Content::Text(text) => text.clone(),
        Content::Comment(_) => String::new(),
        Content::Element(element) => element.children.iter().map(expected_text).collect(),
    }
}

proptest! {
    #[test]
    fn test_text_content_concatenates_text_descendants(fixed in arb_element()) {
        let mut document = Document::new();
        let node = fixed.domify(&mut document);
        let expected = fixed.children.iter().map(expected_text).collect::<String>();
        prop_assert_eq!(document.text_content(node), expected);
    }

    #[test]
    fn test_descendants_report_consistent_parents(fixed in arb_element()) {
        let mut document = Document::new();
        let node = fixed.domify(&mut document);
        for descendant in document.descendants(node).skip(1).collect::<Vec<_>>() {
            let parent = document.parent(descendant).unwrap();
            prop_assert!(document.children(parent).any(|child| child == descendant));
        }
    }

    #[test]
    fn test_set_text_content_round_trips(fixed in arb_element(), text in TEXT) {
        let mut document = Document::new();
        let node = fixed.domify(&mut document);
        document.set_text_content(node, &text).unwrap();
        prop_assert_eq!(document.text_content(node), text);
    }
}
