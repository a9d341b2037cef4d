use std::borrow::Cow;

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}

pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}
