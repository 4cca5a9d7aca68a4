//! Markup serialization.

use crate::element::{Content, Element};
use crate::types::Tag;

/// Serialize `element` and its subtree as HTML.
///
/// Generated ids are omitted; author ids, classes, inline styles and
/// `data-*` attributes are written in that order.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if element.tag == Tag::Text {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape(text));
        }
        return;
    }

    let name = element.tag.name();
    out.push('<');
    out.push_str(name);
    if element.has_explicit_id() {
        push_attr(out, "id", &element.id);
    }
    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }
    if let Some(css) = element.style.to_css() {
        push_attr(out, "style", &css);
    }
    let mut data: Vec<_> = element.data.iter().collect();
    data.sort();
    for (key, value) in data {
        push_attr(out, &format!("data-{key}"), value);
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
