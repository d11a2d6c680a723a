use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{parser::parse_inline, types::InlineNode};

/// Renders inline-markup text as an HTML fragment.
///
/// Literal text and construct bodies are escaped; link targets are escaped
/// as attribute values. Links open in a new tab.
pub fn render_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for node in parse_inline(s) {
        match node {
            InlineNode::Text(sp) => out.push_str(&encode_text(sp.slice(s))),
            InlineNode::StrongEmphasis { inner, .. } => {
                out.push_str("<strong><em>");
                out.push_str(&encode_text(inner.slice(s)));
                out.push_str("</em></strong>");
            }
            InlineNode::Strong { inner, .. } => {
                out.push_str("<strong>");
                out.push_str(&encode_text(inner.slice(s)));
                out.push_str("</strong>");
            }
            InlineNode::Emphasis { inner, .. } => {
                out.push_str("<em>");
                out.push_str(&encode_text(inner.slice(s)));
                out.push_str("</em>");
            }
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                out.push_str(&encode_text(inner.slice(s)));
                out.push_str("</code>");
            }
            InlineNode::Link { text, href, .. } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(href.slice(s)));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                out.push_str(&encode_text(text.slice(s)));
                out.push_str("</a>");
            }
        }
    }
    out
}

/// The visible text with all markup delimiters removed.
pub fn to_plain_text(s: &str) -> String {
    parse_inline(s)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(sp) => sp.slice(s),
            InlineNode::StrongEmphasis { inner, .. }
            | InlineNode::Strong { inner, .. }
            | InlineNode::Emphasis { inner, .. }
            | InlineNode::CodeSpan { inner, .. } => inner.slice(s),
            InlineNode::Link { text, .. } => text.slice(s),
        })
        .collect()
}
