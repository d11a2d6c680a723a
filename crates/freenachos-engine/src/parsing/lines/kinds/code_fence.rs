/// Fenced code block delimiters.
///
/// Only backtick fences are recognized; the fence body is a raw zone.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    /// Whether a trimmed line opens or closes a fence.
    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// The info string after the opening backticks, or `text` when absent.
    pub fn language(trimmed: &str) -> &str {
        let info = trimmed
            .strip_prefix(Self::BACKTICKS)
            .map(str::trim)
            .unwrap_or_default();
        if info.is_empty() {
            Self::DEFAULT_LANGUAGE
        } else {
            info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence() {
        assert!(CodeFence::is_fence("```rust"));
        assert!(CodeFence::is_fence("````"));
        assert!(!CodeFence::is_fence("~~~"));
        assert!(!CodeFence::is_fence("`inline`"));
    }

    #[test]
    fn language_from_info_string() {
        assert_eq!(CodeFence::language("```js"), "js");
        assert_eq!(CodeFence::language("```  python  "), "python");
    }

    #[test]
    fn missing_language_defaults_to_text() {
        assert_eq!(CodeFence::language("```"), "text");
        assert_eq!(CodeFence::language("```   "), "text");
    }
}
