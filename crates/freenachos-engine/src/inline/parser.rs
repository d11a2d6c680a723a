use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong, StrongEmphasis},
    span::Span,
    types::InlineNode,
};

/// Parses inline-markup text into a sequence of [`InlineNode`]s.
///
/// At each position the constructs are tried in precedence order:
/// `***bold italic***`, `**bold**`, `*italic*`, `` `code` ``, `[text](href)`.
/// The first that matches is taken and scanning resumes after it; if none
/// matches the cursor moves on by one character. Matches never overlap and
/// are not nested.
///
/// # Returns
/// Nodes covering the entire input. Unclosed constructs stay in
/// `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_construct(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if let Some((full, inner)) = try_parse_delimited(cur, StrongEmphasis::DELIM) {
        return Some(InlineNode::StrongEmphasis { full, inner });
    }
    if let Some((full, inner)) = try_parse_delimited(cur, Strong::DELIM) {
        return Some(InlineNode::Strong { full, inner });
    }
    if let Some((full, inner)) = try_parse_delimited(cur, Emphasis::DELIM) {
        return Some(InlineNode::Emphasis { full, inner });
    }
    if let Some((full, inner)) = try_parse_delimited(cur, CodeSpan::DELIM) {
        return Some(InlineNode::CodeSpan { full, inner });
    }
    try_parse_link(cur)
}

/// Attempts `delim inner delim` at the cursor.
///
/// `inner` is at least one character, ends at the first following `delim`
/// and never crosses a newline. On failure the cursor is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &str) -> Option<(Span, Span)> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    // The body needs at least one character before a closer can match.
    match cur.bump() {
        Some('\n') | None => {
            *cur = saved;
            return None;
        }
        Some(_) => {}
    }

    loop {
        if cur.starts_with(delim) {
            break;
        }
        match cur.bump() {
            Some('\n') | None => {
                *cur = saved;
                return None;
            }
            Some(_) => {}
        }
    }
    let inner_end = cur.pos();
    cur.bump_n(delim.len());

    Some((
        Span {
            start,
            end: cur.pos(),
        },
        Span {
            start: inner_start,
            end: inner_end,
        },
    ))
}

/// Attempts `[text](href)` at the cursor.
///
/// `text` runs to the first `]` and must be non-empty; `(` must follow
/// immediately; `href` runs to the first `)` and must be non-empty.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek_byte() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [

    let text = scan_until(cur, Link::TEXT_CLOSE);
    if text.is_none() || cur.peek_byte() != Some(Link::TEXT_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    if cur.peek_byte() != Some(Link::HREF_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (

    let href = scan_until(cur, Link::HREF_CLOSE);
    if href.is_none() || cur.peek_byte() != Some(Link::HREF_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        text: text?,
        href: href?,
    })
}

/// Consumes characters up to (not including) `stop`; `None` if nothing was consumed.
fn scan_until(cur: &mut Cursor<'_>, stop: u8) -> Option<Span> {
    let start = cur.pos();
    while !cur.eof() && cur.peek_byte() != Some(stop) {
        cur.bump();
    }
    let span = Span {
        start,
        end: cur.pos(),
    };
    (!span.is_empty()).then_some(span)
}
