/// A byte range `[start, end)` into a block's inline-markup text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The text this span covers in `s`.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_slice() {
        let sp = Span { start: 2, end: 6 };
        assert_eq!(sp.len(), 4);
        assert_eq!(sp.slice("**bold**"), "bold");
    }

    #[test]
    fn inverted_span_is_empty() {
        assert!(Span { start: 5, end: 3 }.is_empty());
    }
}
