use hot::{Document, Error};

#[test]
fn test_append_child() {
    let mut document = Document::new();
    let body = document.body();
    let div = document.create_element("div");

    let returned = document.append_child(body, div).unwrap();

    assert_eq!(returned, div);
    assert_eq!(document.parent(div), Some(body));
    assert_eq!(document.to_string(body), "<body><div></div></body>");
}

#[test]
fn test_append_children_in_order() {
    let mut document = Document::new();
    let body = document.body();
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(body, a).unwrap();
    document.append_child(body, b).unwrap();

    assert_eq!(document.to_string(body), "<body><a></a><b></b></body>");
}

#[test]
fn test_append_text() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let text = document.append_text(div, "hello").unwrap();

    assert_eq!(document.text_str(text), Some("hello"));
    assert_eq!(document.to_string(div), "<div>hello</div>");
}

#[test]
fn test_insert_before() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(div, b).unwrap();
    document.insert_before(div, a, Some(b)).unwrap();

    assert_eq!(document.to_string(div), "<div><a></a><b></b></div>");
}

#[test]
fn test_insert_before_none_appends() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(div, a).unwrap();
    document.insert_before(div, b, None).unwrap();

    assert_eq!(document.to_string(div), "<div><a></a><b></b></div>");
}

#[test]
fn test_insert_before_reference_not_a_child() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let a = document.create_element("a");
    let stranger = document.create_element("b");

    let err = document.insert_before(div, a, Some(stranger)).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_insert_before_itself_keeps_position() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(div, a).unwrap();
    document.append_child(div, b).unwrap();

    document.insert_before(div, a, Some(a)).unwrap();

    assert_eq!(document.to_string(div), "<div><a></a><b></b></div>");
}

#[test]
fn test_append_moves_node() {
    let mut document = Document::new();
    let old_parent = document.create_element("div");
    let new_parent = document.create_element("section");
    let child = document.create_element("span");
    document.append_child(old_parent, child).unwrap();
    document.append_child(new_parent, child).unwrap();

    assert_eq!(document.parent(child), Some(new_parent));
    assert_eq!(document.to_string(old_parent), "<div></div>");
    assert_eq!(
        document.to_string(new_parent),
        "<section><span></span></section>"
    );
}

#[test]
fn test_remove_child() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let span = document.create_element("span");
    document.append_child(div, span).unwrap();

    let removed = document.remove_child(div, span).unwrap();

    assert_eq!(removed, span);
    assert_eq!(document.parent(span), None);
    assert_eq!(document.to_string(div), "<div></div>");
}

#[test]
fn test_remove_child_not_a_child() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let stranger = document.create_element("span");

    let err = document.remove_child(div, stranger).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_remove_child_twice() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let span = document.create_element("span");
    document.append_child(div, span).unwrap();

    document.remove_child(div, span).unwrap();
    let err = document.remove_child(div, span).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_remove_child_detaches_body() {
    let mut document = Document::new();
    let root = document.root();
    let body = document.body();

    let removed = document.remove_child(root, body).unwrap();

    assert_eq!(removed, body);
    assert_eq!(document.parent(body), None);
    assert_eq!(document.to_string(root), "");

    // body is an ordinary element and can be put back
    document.append_child(root, body).unwrap();
    assert_eq!(document.to_string(root), "<body></body>");
}

#[test]
fn test_replace_child() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let old = document.create_element("em");
    let new = document.create_element("strong");
    document.append_child(div, old).unwrap();

    let returned = document.replace_child(div, new, old).unwrap();

    assert_eq!(returned, old);
    assert_eq!(document.parent(old), None);
    assert_eq!(document.to_string(div), "<div><strong></strong></div>");
}

#[test]
fn test_replace_child_keeps_position() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let a = document.create_element("a");
    let b = document.create_element("b");
    let c = document.create_element("c");
    let new = document.create_element("em");
    document.append_child(div, a).unwrap();
    document.append_child(div, b).unwrap();
    document.append_child(div, c).unwrap();

    document.replace_child(div, new, b).unwrap();

    assert_eq!(
        document.to_string(div),
        "<div><a></a><em></em><c></c></div>"
    );
}

#[test]
fn test_append_document_fragment_splices_children() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let fragment = document.create_document_fragment();
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(fragment, a).unwrap();
    document.append_child(fragment, b).unwrap();

    let returned = document.append_child(div, fragment).unwrap();

    assert_eq!(returned, fragment);
    assert_eq!(document.to_string(div), "<div><a></a><b></b></div>");
    assert!(!document.has_child_nodes(fragment));
    assert_eq!(document.parent(a), Some(div));
    assert_eq!(document.parent(b), Some(div));
}

#[test]
fn test_insert_document_fragment_before_reference() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let last = document.create_element("z");
    document.append_child(div, last).unwrap();
    let fragment = document.create_document_fragment();
    let a = document.create_element("a");
    let b = document.create_element("b");
    document.append_child(fragment, a).unwrap();
    document.append_child(fragment, b).unwrap();

    document.insert_before(div, fragment, Some(last)).unwrap();

    assert_eq!(
        document.to_string(div),
        "<div><a></a><b></b><z></z></div>"
    );
}

#[test]
fn test_cannot_insert_node_into_own_subtree() {
    let mut document = Document::new();
    let outer = document.create_element("div");
    let inner = document.create_element("span");
    document.append_child(outer, inner).unwrap();

    let err = document.append_child(inner, outer).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_cannot_insert_node_into_itself() {
    let mut document = Document::new();
    let div = document.create_element("div");

    let err = document.append_child(div, div).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_cannot_append_to_text_node() {
    let mut document = Document::new();
    let text = document.create_text_node("text");
    let div = document.create_element("div");

    let err = document.append_child(text, div).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_cannot_append_to_comment_node() {
    let mut document = Document::new();
    let comment = document.create_comment("comment");
    let div = document.create_element("div");

    let err = document.append_child(comment, div).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_cannot_move_document_node() {
    let mut document = Document::new();
    let root = document.root();
    let div = document.create_element("div");

    let err = document.append_child(div, root).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_set_text_content() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let span = document.create_element("span");
    document.append_child(div, span).unwrap();
    document.append_text(div, "old").unwrap();

    document.set_text_content(div, "new").unwrap();

    assert_eq!(document.to_string(div), "<div>new</div>");
    assert_eq!(document.children(div).count(), 1);
    assert!(document.is_removed(span));
}

#[test]
fn test_set_text_content_empty_string_still_adds_text_node() {
    let mut document = Document::new();
    let div = document.create_element("div");
    document.append_text(div, "old").unwrap();

    document.set_text_content(div, "").unwrap();

    assert_eq!(document.children(div).count(), 1);
    let text = document.first_child(div).unwrap();
    assert_eq!(document.text_str(text), Some(""));
    assert_eq!(document.to_string(div), "<div></div>");
}

#[test]
fn test_set_text_content_on_text_node() {
    let mut document = Document::new();
    let text = document.create_text_node("text");

    let err = document.set_text_content(text, "new").unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn test_clone_node_shallow() {
    let mut document = Document::new();
    let div = document.create_element("div");
    document.element_mut(div).unwrap().set_attribute("x", "X");
    document.append_text(div, "child").unwrap();

    let clone = document.clone_node(div, false);

    assert!(!document.has_child_nodes(clone));
    let element = document.element(clone).unwrap();
    assert_eq!(element.get_attribute("x").as_deref(), Some("X"));
    assert_eq!(document.to_string(clone), r#"<div x="X"></div>"#);
}

#[test]
fn test_clone_node_deep() {
    let mut document = Document::new();
    let div = document.create_element("div");
    let span = document.create_element("span");
    document.append_child(div, span).unwrap();
    document.append_text(span, "text").unwrap();

    let clone = document.clone_node(div, true);

    assert!(document.compare(div, clone));
    assert_eq!(document.to_string(clone), "<div><span>text</span></div>");
}

#[test]
fn test_clone_node_deep_is_independent() {
    let mut document = Document::new();
    let div = document.create_element("div");
    document.append_text(div, "original").unwrap();

    let clone = document.clone_node(div, true);
    document.set_text_content(clone, "changed").unwrap();

    assert_eq!(document.to_string(div), "<div>original</div>");
    assert_eq!(document.to_string(clone), "<div>changed</div>");
}

#[test]
fn test_clone_does_not_detach_original() {
    let mut document = Document::new();
    let body = document.body();
    let div = document.create_element("div");
    document.append_child(body, div).unwrap();

    let clone = document.clone_node(div, true);

    assert_eq!(document.parent(div), Some(body));
    assert_eq!(document.parent(clone), None);
}
