//! # HTML Parsing
//!
//! Rich clipboard pastes arrive as HTML. The body's children are walked depth
//! first and each element is mapped to a block by tag name; container
//! elements contribute only their children's blocks.
//!
//! ## Modules
//!
//! - **`node`**: `DomNode`, the tree capabilities the walker relies on, and
//!   its implementation for `markup5ever_rcdom` handles
//! - **`inline`**: inline element to inline-markup conversion

pub mod inline;
pub mod node;

use std::sync::OnceLock;

use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, RcDom};
use regex::Regex;

use crate::models::{CalloutVariant, ContentBlock};
use crate::parsing::{ParseError, image_url::extract_image_url};

pub use inline::to_inline_markup;
pub use node::{DomNode, NodeKind};

/// Title given to callouts built from `<aside>`.
pub const ASIDE_TITLE: &str = "Quick Note";
/// Title given to every code block from `<pre>`.
pub const PRE_TITLE: &str = "Code";

const CONTAINER_TAGS: [&str; 5] = ["div", "article", "section", "main", "span"];

/// Parses an HTML fragment and converts its body into blocks.
pub fn parse_html(html: &str) -> Result<Vec<ContentBlock>, ParseError> {
    let body = parse_body(html)?;
    Ok(parse_html_tree(body.handle()))
}

/// A parsed document together with its `<body>` element.
pub struct HtmlBody {
    // Dropping an `RcDom` empties the children of every node in the tree,
    // so the dom lives as long as the body handle is in use.
    _dom: RcDom,
    body: Handle,
}

impl HtmlBody {
    pub fn handle(&self) -> &Handle {
        &self.body
    }
}

/// Builds a document from `html` and locates its `<body>` element.
pub fn parse_body(html: &str) -> Result<HtmlBody, ParseError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    let body = dom
        .document
        .find_descendant("body")
        .ok_or(ParseError::MissingBody)?;
    Ok(HtmlBody { _dom: dom, body })
}

/// Converts the children of an already parsed body element.
pub fn parse_html_tree<N: DomNode>(body: &N) -> Vec<ContentBlock> {
    let mut out = vec![];
    for child in body.children() {
        collect_blocks(&child, &mut out);
    }
    out
}

fn collect_blocks<N: DomNode>(node: &N, out: &mut Vec<ContentBlock>) {
    match node.kind() {
        NodeKind::Text => {
            let text = node.text();
            let text = text.trim();
            if !text.is_empty() {
                out.push(ContentBlock::paragraph(text));
            }
        }
        NodeKind::Element => {
            let tag = node.tag_name().unwrap_or_default();
            if CONTAINER_TAGS.contains(&tag.as_str()) {
                for child in node.children() {
                    collect_blocks(&child, out);
                }
            } else if let Some(block) = element_block(node, &tag) {
                log::trace!("<{tag}> -> {}", block.kind().as_str());
                out.push(block);
            }
        }
        NodeKind::Other => {}
    }
}

fn element_block<N: DomNode>(node: &N, tag: &str) -> Option<ContentBlock> {
    if let Some(level) = heading_level(tag) {
        return Some(ContentBlock::header(level, to_inline_markup(node)));
    }

    match tag {
        "p" => paragraph_block(node),
        "aside" => Some(ContentBlock::callout(
            CalloutVariant::Insight,
            ASIDE_TITLE,
            strip_leading_pictograph(&to_inline_markup(node)),
        )),
        "ul" | "ol" => {
            let items = node
                .children()
                .iter()
                .filter(|child| child.is_element("li"))
                .map(to_inline_markup)
                .collect();
            ContentBlock::list(items)
        }
        "pre" => Some(pre_block(node)),
        "blockquote" => Some(ContentBlock::quote(to_inline_markup(node), "")),
        "img" => Some(ContentBlock::image(
            node.attr("src").unwrap_or_default(),
            node.attr("alt").unwrap_or_default(),
            "",
        )),
        _ => {
            let text = to_inline_markup(node);
            (!text.trim().is_empty()).then(|| ContentBlock::paragraph(text))
        }
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn paragraph_block<N: DomNode>(node: &N) -> Option<ContentBlock> {
    let content = to_inline_markup(node);
    if content.trim().is_empty() {
        return None;
    }
    match extract_image_url(&content) {
        Some(url) => Some(ContentBlock::image(url, "", "")),
        None => Some(ContentBlock::paragraph(content)),
    }
}

fn pre_block<N: DomNode>(node: &N) -> ContentBlock {
    let code = node.find_descendant("code");
    let content = code
        .as_ref()
        .map_or_else(|| node.text_content(), DomNode::text_content);
    let language = code
        .and_then(|c| c.attr("class"))
        .and_then(|class| language_from_class(&class).map(str::to_string))
        .unwrap_or_else(|| "text".to_string());
    ContentBlock::Code {
        language,
        title: PRE_TITLE.to_string(),
        content: content.trim().to_string(),
    }
}

fn language_from_class(class: &str) -> Option<&str> {
    static LANGUAGE: OnceLock<Regex> = OnceLock::new();
    let re = LANGUAGE
        .get_or_init(|| Regex::new(r"language-(\w+)").expect("Invalid language class regex"));
    re.captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Drops one leading pictograph (Notion callout icon) and surrounding space.
fn strip_leading_pictograph(text: &str) -> String {
    static PICTOGRAPH: OnceLock<Regex> = OnceLock::new();
    let re = PICTOGRAPH.get_or_init(|| {
        Regex::new(r"^[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]\s*")
            .expect("Invalid pictograph regex")
    });
    re.replace(text, "").trim().to_string()
}
