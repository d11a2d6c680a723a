use crate::inline::kinds::{CodeSpan, Emphasis, Link, Strong};

use super::node::{DomNode, NodeKind};

/// Flattens an element's children into inline-markup text.
///
/// Text passes through verbatim; `strong`/`b`, `em`/`i`, `code` and `a[href]`
/// become their markup delimiters and `br` becomes a single space. Other
/// elements contribute only their converted children.
pub fn to_inline_markup<N: DomNode>(element: &N) -> String {
    let mut out = String::new();
    append_children(element, &mut out);
    out
}

fn append_children<N: DomNode>(element: &N, out: &mut String) {
    for child in element.children() {
        match child.kind() {
            NodeKind::Text => out.push_str(&child.text()),
            NodeKind::Element => append_element(&child, out),
            NodeKind::Other => {}
        }
    }
}

fn append_element<N: DomNode>(node: &N, out: &mut String) {
    let tag = node.tag_name().unwrap_or_default();
    if tag == "br" {
        out.push(' ');
        return;
    }

    let inner = to_inline_markup(node);
    match tag.as_str() {
        "strong" | "b" => wrap(out, Strong::DELIM, &inner, Strong::DELIM),
        "em" | "i" => wrap(out, Emphasis::DELIM, &inner, Emphasis::DELIM),
        "code" => wrap(out, CodeSpan::DELIM, &inner, CodeSpan::DELIM),
        "a" => match node.attr("href").filter(|h| !h.is_empty()) {
            Some(href) => Link::write(out, &inner, &href),
            None => out.push_str(&inner),
        },
        _ => out.push_str(&inner),
    }
}

fn wrap(out: &mut String, open: &str, inner: &str, close: &str) {
    out.push_str(open);
    out.push_str(inner);
    out.push_str(close);
}
