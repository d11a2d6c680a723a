use std::sync::OnceLock;

use regex::Regex;

use crate::models::{CalloutVariant, capitalize};

/// Callout fences: `:::warning Title` ... `:::`, or on one line
/// `:::tip Stay patient:::`.
pub struct Callout;

/// The parts of a callout's opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutOpen<'a> {
    /// The keyword right after the marker, if any (`warning`, `tip`, ...).
    pub keyword: Option<&'a str>,
    /// Text after the keyword with any closing marker removed.
    pub text: &'a str,
    /// The whole callout sits on the opening line.
    pub single_line: bool,
}

impl CalloutOpen<'_> {
    pub fn variant(&self) -> CalloutVariant {
        self.keyword
            .map(CalloutVariant::from_keyword)
            .unwrap_or_default()
    }

    /// Capitalized keyword, used when no explicit title is given.
    pub fn keyword_title(&self) -> String {
        capitalize(self.keyword.unwrap_or(CalloutVariant::Insight.as_str()))
    }
}

impl Callout {
    pub const MARKER: &'static str = ":::";

    fn open_regex() -> &'static Regex {
        static OPEN: OnceLock<Regex> = OnceLock::new();
        OPEN.get_or_init(|| {
            Regex::new(r"^:::([A-Za-z0-9_]+)?\s*(.*?)(?:::)?$").expect("Invalid callout regex")
        })
    }

    fn keyword_only_regex() -> &'static Regex {
        static KEYWORD_ONLY: OnceLock<Regex> = OnceLock::new();
        KEYWORD_ONLY.get_or_init(|| {
            Regex::new(r"^:::[A-Za-z0-9_]+\s*:::$").expect("Invalid callout regex")
        })
    }

    /// Whether a trimmed line opens or closes a callout.
    pub fn is_marker(trimmed: &str) -> bool {
        trimmed.starts_with(Self::MARKER)
    }

    /// Parses an opening line. `:::tip:::` carries no body, so it opens a
    /// multi-line callout rather than closing itself.
    ///
    /// The optional closer in the pattern is two colons, so a single-line
    /// callout keeps the third colon (`:::tip Fold:::` has text `Fold:`) and
    /// a multi-line opener may end in `::` without it reaching the title.
    pub fn parse_open(trimmed: &str) -> Option<CalloutOpen<'_>> {
        let caps = Self::open_regex().captures(trimmed)?;
        let keyword = caps.get(1).map(|m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str());
        let single_line =
            trimmed.ends_with(Self::MARKER) && !Self::keyword_only_regex().is_match(trimmed);
        let text = if single_line {
            text.strip_suffix(Self::MARKER).unwrap_or(text).trim()
        } else {
            text
        };
        Some(CalloutOpen {
            keyword,
            text,
            single_line,
        })
    }
}
