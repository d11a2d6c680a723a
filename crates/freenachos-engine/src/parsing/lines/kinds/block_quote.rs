use std::sync::OnceLock;

use regex::Regex;

/// Blockquote prefix and the trailing-attribution convention.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn is_quote(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and the whitespace after it.
    pub fn strip_prefix(trimmed: &str) -> &str {
        trimmed
            .strip_prefix(Self::PREFIX)
            .map(str::trim_start)
            .unwrap_or(trimmed)
    }

    fn attribution_regex() -> &'static Regex {
        static ATTRIBUTION: OnceLock<Regex> = OnceLock::new();
        ATTRIBUTION.get_or_init(|| {
            Regex::new(r"(.+?)(?:\s*[—–-]{1,2}\s*)([^—–-]+)$").expect("Invalid attribution regex")
        })
    }

    /// Splits `quote text -- Author` into `(content, attribution)`.
    ///
    /// The attribution is whatever follows the last dash-like separator, so a
    /// hyphenated word near the end of an unattributed quote is split too.
    pub fn split_attribution(text: &str) -> (&str, &str) {
        match Self::attribution_regex().captures(text) {
            Some(caps) => match (caps.get(1), caps.get(2)) {
                (Some(content), Some(author)) => (content.as_str().trim(), author.as_str().trim()),
                _ => (text, ""),
            },
            None => (text, ""),
        }
    }
}
