use std::sync::OnceLock;

use regex::Regex;

/// ATX-style heading with one to three `#` characters.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    fn regex() -> &'static Regex {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        HEADING.get_or_init(|| Regex::new(r"^(#{1,3})\s+(.+)$").expect("Invalid heading regex"))
    }

    /// Returns `(level, text)` for a trimmed heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(trimmed)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str().trim();
        Some((level, text))
    }
}
