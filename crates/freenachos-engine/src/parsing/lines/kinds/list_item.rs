use std::sync::OnceLock;

use regex::Regex;

/// Bulleted (`-`, `*`, `•`) and numbered (`1.`) list items.
///
/// Both marker styles produce the same list; a list may mix them freely.
pub struct ListItem;

impl ListItem {
    fn bullet_regex() -> &'static Regex {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        BULLET.get_or_init(|| Regex::new(r"^[-*•]\s+(.+)$").expect("Invalid bullet regex"))
    }

    fn numbered_regex() -> &'static Regex {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        NUMBERED.get_or_init(|| Regex::new(r"^[0-9]+\.\s+(.+)$").expect("Invalid numbered regex"))
    }

    /// The item text after its marker, if the trimmed line is a list item.
    pub fn item_text(trimmed: &str) -> Option<&str> {
        Self::bullet_regex()
            .captures(trimmed)
            .or_else(|| Self::numbered_regex().captures(trimmed))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_item(trimmed: &str) -> bool {
        Self::item_text(trimmed).is_some()
    }
}
