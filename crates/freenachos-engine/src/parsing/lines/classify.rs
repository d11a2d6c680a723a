use crate::parsing::image_url::extract_image_url;

use super::kinds::{BlockQuote, Callout, CodeFence, Heading, ListItem, MarkdownImage};

/// What a single line opens, judged from the line alone.
///
/// Variants are listed in dispatch priority: the first rule that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    CodeFence { language: &'a str },
    Callout,
    Header { level: u8, text: &'a str },
    Quote,
    ListItem,
    ImageUrl(&'a str),
    MarkdownImage { alt: &'a str, src: &'a str },
    Text,
}

/// Classifies individual lines for the plain-text scanner.
pub struct PasteLineClassifier;

impl PasteLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if CodeFence::is_fence(trimmed) {
            return LineClass::CodeFence {
                language: CodeFence::language(trimmed),
            };
        }
        if Callout::is_marker(trimmed) {
            return LineClass::Callout;
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Header { level, text };
        }
        if BlockQuote::is_quote(trimmed) {
            return LineClass::Quote;
        }
        if ListItem::is_item(trimmed) {
            return LineClass::ListItem;
        }
        if let Some(url) = extract_image_url(trimmed) {
            return LineClass::ImageUrl(url);
        }
        if let Some((alt, src)) = MarkdownImage::parse(trimmed) {
            return LineClass::MarkdownImage { alt, src };
        }
        LineClass::Text
    }

    /// Whether `line` ends a running paragraph.
    ///
    /// Looser than [`classify`](Self::classify): any `#` or `![` prefix stops
    /// the paragraph even when the line is not a valid heading or image.
    pub fn interrupts_paragraph(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty()
            || trimmed.starts_with(Heading::MARKER)
            || BlockQuote::is_quote(trimmed)
            || CodeFence::is_fence(trimmed)
            || Callout::is_marker(trimmed)
            || ListItem::is_item(trimmed)
            || MarkdownImage::starts_image(trimmed)
            || extract_image_url(trimmed).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   \t", LineClass::Blank)]
    #[case("```rust", LineClass::CodeFence { language: "rust" })]
    #[case(":::tip", LineClass::Callout)]
    #[case("## Ranges", LineClass::Header { level: 2, text: "Ranges" })]
    #[case("> quoted", LineClass::Quote)]
    #[case("  - item", LineClass::ListItem)]
    #[case("3. third", LineClass::ListItem)]
    #[case("https://example.com/a.png", LineClass::ImageUrl("https://example.com/a.png"))]
    #[case("![alt](b.png)", LineClass::MarkdownImage { alt: "alt", src: "b.png" })]
    #[case("Just words", LineClass::Text)]
    #[case("#### deep", LineClass::Text)]
    fn classify_lines(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(PasteLineClassifier.classify(line), expected);
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(
            PasteLineClassifier.classify("``` # not a heading"),
            LineClass::CodeFence {
                language: "# not a heading"
            }
        );
    }

    #[rstest]
    #[case("#hashtag", true)]
    #[case("![broken", true)]
    #[case("> quote", true)]
    #[case(":::", true)]
    #[case("- item", true)]
    #[case("", true)]
    #[case("https://abc.supabase.co/storage/v1/object/public/x", true)]
    #[case("plain continuation", false)]
    #[case("https://example.com/page", false)]
    fn paragraph_interruptions(#[case] line: &str, #[case] interrupts: bool) {
        assert_eq!(PasteLineClassifier.interrupts_paragraph(line), interrupts);
    }
}
