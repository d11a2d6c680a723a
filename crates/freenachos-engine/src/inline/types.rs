use super::span::Span;

/// A decoded inline node with byte spans into the markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text outside any construct.
    Text(Span),
    /// `***inner***`
    StrongEmphasis {
        /// Full span including delimiters.
        full: Span,
        inner: Span,
    },
    /// `**inner**`
    Strong { full: Span, inner: Span },
    /// `*inner*`
    Emphasis { full: Span, inner: Span },
    /// `` `inner` `` (raw zone)
    CodeSpan { full: Span, inner: Span },
    /// `[text](href)`
    Link { full: Span, text: Span, href: Span },
}

impl InlineNode {
    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::StrongEmphasis { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
