use std::sync::OnceLock;

use regex::Regex;

use crate::models::ContentBlock;

/// Markdown image syntax `![alt](url)`.
///
/// Notion exports pasted screenshots as `attachment:` references that do not
/// resolve outside Notion; those become placeholder images.
pub struct MarkdownImage;

impl MarkdownImage {
    pub const PREFIX: &'static str = "![";
    pub const ATTACHMENT_SCHEME: &'static str = "attachment:";
    pub const PLACEHOLDER_ALT: &'static str = "Image placeholder - add URL";
    pub const ATTACHMENT_CAPTION: &'static str =
        "⚠️ Notion attachment detected - please add image URL";

    fn regex() -> &'static Regex {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        IMAGE.get_or_init(|| {
            Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").expect("Invalid markdown image regex")
        })
    }

    pub fn starts_image(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Returns `(alt, src)` when the trimmed line is exactly one image.
    pub fn parse(trimmed: &str) -> Option<(&str, &str)> {
        let caps = Self::regex().captures(trimmed)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    pub fn to_block(alt: &str, src: &str) -> ContentBlock {
        if src.starts_with(Self::ATTACHMENT_SCHEME) {
            let alt = if alt.is_empty() {
                Self::PLACEHOLDER_ALT
            } else {
                alt
            };
            ContentBlock::image("", alt, Self::ATTACHMENT_CAPTION)
        } else {
            ContentBlock::image(src, alt, "")
        }
    }
}
