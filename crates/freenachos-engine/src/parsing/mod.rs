//! # Paste Parsing
//!
//! Converts pasted Notion content into [`ContentBlock`]s.
//!
//! ## Dispatch
//!
//! Line endings are normalized to `\n` first. If the paste contains anything
//! shaped like an HTML tag (`<` + letter ... `>`) it is treated as a rich
//! clipboard paste and handed to [`html`]; otherwise it is scanned line by
//! line by [`lines`].
//!
//! ## Modules
//!
//! - **`lines`**: plain-text / markdown-ish scanner
//! - **`html`**: HTML tree walker and inline-element converter
//! - **`image_url`**: bare image URL detection shared by both parsers
//! - **`invariants`**: output checks used by tests

pub mod html;
pub mod image_url;
pub mod invariants;
pub mod lines;

use std::sync::OnceLock;

use regex::Regex;

use crate::models::ContentBlock;

pub use html::parse_html;
pub use lines::parse_plain_text;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML paste: {0}")]
    Html(#[from] std::io::Error),
    #[error("HTML paste has no body element")]
    MissingBody,
}

/// How a paste should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteFormat {
    Html,
    PlainText,
}

impl PasteFormat {
    /// Detects the format from the paste content.
    pub fn detect(text: &str) -> Self {
        if looks_like_html(text) {
            Self::Html
        } else {
            Self::PlainText
        }
    }
}

/// Parses a paste, detecting whether it is HTML or plain text.
///
/// Empty or whitespace-only input yields no blocks. Only the HTML path can
/// fail, and only if the tree builder cannot read its input.
pub fn parse_paste(content: &str) -> Result<Vec<ContentBlock>, ParseError> {
    parse_as(content, PasteFormat::detect(content))
}

/// Parses a paste with an explicit format, bypassing detection.
pub fn parse_as(content: &str, format: PasteFormat) -> Result<Vec<ContentBlock>, ParseError> {
    let text = normalize_line_endings(content);
    log::debug!("parsing {} byte paste as {format:?}", text.len());

    let blocks = match format {
        PasteFormat::Html => parse_html(&text)?,
        PasteFormat::PlainText => parse_plain_text(&text),
    };

    log::debug!("paste produced {} blocks", blocks.len());
    Ok(blocks)
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whether `text` contains something shaped like an HTML tag.
pub fn looks_like_html(text: &str) -> bool {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?is)<[a-z].*>").expect("Invalid HTML tag regex"))
        .is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<p>hi</p>", true)]
    #[case("text then <B>bold</B>", true)]
    #[case("<div\nclass=\"x\">", true)]
    #[case("a < b and c > d", false)]
    #[case("<3 poker>", false)]
    #[case("plain text", false)]
    #[case("<br", false)]
    fn html_detection(#[case] text: &str, #[case] html: bool) {
        assert_eq!(looks_like_html(text), html);
    }

    #[test]
    fn line_endings_normalized() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn crlf_paste_parses_like_lf() {
        assert_eq!(
            parse_paste("# Title\r\n\r\nBody").unwrap(),
            parse_paste("# Title\n\nBody").unwrap()
        );
    }

    #[test]
    fn explicit_format_bypasses_detection() {
        let blocks = parse_as("<b>not html</b>", PasteFormat::PlainText).unwrap();
        assert_eq!(blocks, vec![ContentBlock::paragraph("<b>not html</b>")]);
    }

    #[test]
    fn whitespace_only_paste_is_empty() {
        assert!(parse_paste("  \n\t\r\n").unwrap().is_empty());
    }
}
