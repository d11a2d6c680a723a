//! # Plain-Text Parsing
//!
//! Single pass over the pasted lines with an index cursor.
//!
//! ## Phases per step
//!
//! 1. **Classification** (`classify`): the line under the cursor is classified
//!    into a [`LineClass`] from local facts only.
//! 2. **Consumption**: the matching construct consumes as many lines as it
//!    spans (one for a heading, up to the closing fence for code, ...) and
//!    emits at most one block.
//!
//! ## Key Invariants
//!
//! - Every step advances the cursor, so the scan always terminates.
//! - Unterminated fences and callouts run to the end of the input.
//! - Code fence bodies are raw zones: lines are kept verbatim.

pub mod classify;
pub mod kinds;

pub use classify::{LineClass, PasteLineClassifier};

use crate::models::ContentBlock;

use kinds::{BlockQuote, Callout, CodeFence, ListItem, MarkdownImage};

/// Index cursor over an immutable line list.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Splits `text` on `\n`. Line endings must already be normalized.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consumes lines until one satisfies `stop` (left unconsumed) or the end.
    pub fn take_until(&mut self, stop: impl Fn(&str) -> bool) -> Vec<&'a str> {
        let mut taken = vec![];
        while let Some(line) = self.peek() {
            if stop(line) {
                break;
            }
            taken.push(line);
            self.pos += 1;
        }
        taken
    }
}

/// Parses normalized plain text into blocks, in source order.
pub fn parse_plain_text(text: &str) -> Vec<ContentBlock> {
    let classifier = PasteLineClassifier;
    let mut cur = LineCursor::new(text);
    let mut out = vec![];

    while let Some(line) = cur.peek() {
        let block = match classifier.classify(line) {
            LineClass::Blank => {
                cur.bump();
                None
            }
            LineClass::CodeFence { language } => Some(consume_code_fence(&mut cur, language)),
            LineClass::Callout => consume_callout(&mut cur),
            LineClass::Header { level, text } => {
                cur.bump();
                Some(ContentBlock::header(level, text))
            }
            LineClass::Quote => Some(consume_quote(&mut cur)),
            LineClass::ListItem => consume_list(&mut cur),
            LineClass::ImageUrl(url) => {
                cur.bump();
                Some(ContentBlock::image(url, "", ""))
            }
            LineClass::MarkdownImage { alt, src } => {
                cur.bump();
                Some(MarkdownImage::to_block(alt, src))
            }
            LineClass::Text => consume_paragraph(&mut cur, &classifier),
        };
        if let Some(block) = block {
            log::trace!("line {}: {}", cur.pos(), block.kind().as_str());
            out.push(block);
        }
    }

    out
}

fn consume_code_fence(cur: &mut LineCursor<'_>, language: &str) -> ContentBlock {
    cur.bump(); // opening fence
    let body = cur.take_until(|l| CodeFence::is_fence(l.trim()));
    cur.bump(); // closing fence, if any
    ContentBlock::code(language, body.join("\n"))
}

fn consume_callout(cur: &mut LineCursor<'_>) -> Option<ContentBlock> {
    let opener = cur.bump()?;
    let open = Callout::parse_open(opener.trim())?;
    let variant = open.variant();

    if open.single_line {
        return Some(ContentBlock::callout(
            variant,
            open.keyword_title(),
            open.text,
        ));
    }

    let body = cur.take_until(|l| Callout::is_marker(l.trim()));
    cur.bump(); // closing marker, if any
    let title = if open.text.is_empty() {
        open.keyword_title()
    } else {
        open.text.to_string()
    };
    Some(ContentBlock::callout(variant, title, body.join("\n").trim()))
}

fn consume_quote(cur: &mut LineCursor<'_>) -> ContentBlock {
    let lines = cur.take_until(|l| !BlockQuote::is_quote(l.trim()));
    let text = lines
        .iter()
        .map(|l| BlockQuote::strip_prefix(l.trim()))
        .collect::<Vec<_>>()
        .join(" ");
    let (content, attribution) = BlockQuote::split_attribution(text.trim());
    ContentBlock::quote(content, attribution)
}

fn consume_list(cur: &mut LineCursor<'_>) -> Option<ContentBlock> {
    let mut items = vec![];
    while let Some(line) = cur.peek() {
        let trimmed = line.trim();
        if let Some(item) = ListItem::item_text(trimmed) {
            items.push(item.to_string());
            cur.bump();
        } else {
            if trimmed.is_empty() {
                cur.bump();
            }
            break;
        }
    }
    ContentBlock::list(items)
}

fn consume_paragraph(
    cur: &mut LineCursor<'_>,
    classifier: &PasteLineClassifier,
) -> Option<ContentBlock> {
    // The current line already failed every other rule, so it always belongs here.
    let first = cur.bump()?;
    let mut parts = vec![first.trim()];
    parts.extend(
        cur.take_until(|l| classifier.interrupts_paragraph(l))
            .into_iter()
            .map(str::trim),
    );
    Some(ContentBlock::paragraph(parts.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalloutVariant;
    use pretty_assertions::assert_eq;

    fn items(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cursor_take_until_stops_before_match() {
        let mut cur = LineCursor::new("a\nb\nSTOP\nc");
        assert_eq!(cur.take_until(|l| l == "STOP"), vec!["a", "b"]);
        assert_eq!(cur.peek(), Some("STOP"));
        assert_eq!(cur.pos(), 2);
    }

    #[test]
    fn cursor_take_until_runs_to_end() {
        let mut cur = LineCursor::new("a\nb");
        assert_eq!(cur.take_until(|_| false), vec!["a", "b"]);
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn code_fence_preserves_body() {
        let blocks = parse_plain_text("```python\ndef f():\n\n    return 1\n```");
        assert_eq!(
            blocks,
            vec![ContentBlock::code("python", "def f():\n\n    return 1")]
        );
    }

    #[test]
    fn code_fence_body_is_raw() {
        let blocks = parse_plain_text("```\n# not a header\n- not a list\n```\nAfter");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::code("text", "# not a header\n- not a list"),
                ContentBlock::paragraph("After"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = parse_plain_text("```sql\nSELECT 1;\nSELECT 2;");
        assert_eq!(
            blocks,
            vec![ContentBlock::code("sql", "SELECT 1;\nSELECT 2;")]
        );
    }

    #[test]
    fn single_line_callout() {
        let blocks = parse_plain_text(":::tip Position matters:::");
        assert_eq!(
            blocks,
            vec![ContentBlock::callout(
                CalloutVariant::Tip,
                "Tip",
                "Position matters:"
            )]
        );
    }

    #[test]
    fn multi_line_callout_title_drops_two_colon_closer() {
        let blocks = parse_plain_text(":::tip Note::
body
:::");
        assert_eq!(
            blocks,
            vec![ContentBlock::callout(CalloutVariant::Tip, "Note", "body")]
        );
    }

    #[test]
    fn multi_line_callout_without_title_uses_keyword() {
        let blocks = parse_plain_text(":::stat\nWin rate: 5bb/100\nSample: 50k hands\n:::");
        assert_eq!(
            blocks,
            vec![ContentBlock::callout(
                CalloutVariant::Stat,
                "Stat",
                "Win rate: 5bb/100\nSample: 50k hands"
            )]
        );
    }

    #[test]
    fn unterminated_callout_runs_to_end() {
        let blocks = parse_plain_text(":::warning Tilt\nTake a break\n\n# Still inside");
        assert_eq!(
            blocks,
            vec![ContentBlock::callout(
                CalloutVariant::Warning,
                "Tilt",
                "Take a break\n\n# Still inside"
            )]
        );
    }

    #[test]
    fn quote_lines_join_with_space() {
        let blocks = parse_plain_text("> Play tight\n> and aggressive\nNext");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::quote("Play tight and aggressive", ""),
                ContentBlock::paragraph("Next"),
            ]
        );
    }

    #[test]
    fn list_blank_line_is_consumed() {
        let blocks = parse_plain_text("- a\n- b\n\n- c");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::List {
                    items: items(&["a", "b"])
                },
                ContentBlock::List {
                    items: items(&["c"])
                },
            ]
        );
    }

    #[test]
    fn list_stops_at_text_line() {
        let blocks = parse_plain_text("1. one\n2. two\nNot an item");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::List {
                    items: items(&["one", "two"])
                },
                ContentBlock::paragraph("Not an item"),
            ]
        );
    }

    #[test]
    fn paragraph_merges_lines_until_interrupted() {
        let blocks = parse_plain_text("First line\n  second line  \n## Next\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("First line second line"),
                ContentBlock::header(2, "Next"),
            ]
        );
    }

    #[test]
    fn malformed_markers_become_paragraphs() {
        let blocks = parse_plain_text("#hashtag\n#### deep\n![broken");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("#hashtag"),
                ContentBlock::paragraph("#### deep"),
                ContentBlock::paragraph("![broken"),
            ]
        );
    }

    #[test]
    fn image_url_interrupts_paragraph() {
        let blocks = parse_plain_text("Look at this:\nhttps://example.com/hand.png\nNice.");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Look at this:"),
                ContentBlock::image("https://example.com/hand.png", "", ""),
                ContentBlock::paragraph("Nice."),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_plain_text("").is_empty());
        assert!(parse_plain_text("\n   \n\t\n").is_empty());
    }
}
