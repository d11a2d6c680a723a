use serde::{Deserialize, Serialize};

/// Highest header level an article can display.
pub const MAX_HEADER_LEVEL: u8 = 3;

/// Semantic flavour of a callout box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    #[default]
    Insight,
    Warning,
    Stat,
    Tip,
}

impl CalloutVariant {
    /// Maps a callout keyword to a variant. Unknown keywords fall back to `Insight`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "insight" => Self::Insight,
            "warning" => Self::Warning,
            "stat" => Self::Stat,
            "tip" => Self::Tip,
            _ => Self::Insight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insight => "insight",
            Self::Warning => "warning",
            Self::Stat => "stat",
            Self::Tip => "tip",
        }
    }
}

/// One structural unit of an article.
///
/// Textual fields other than `Code::content` carry inline markup
/// (see [`crate::inline`]). The serialized form matches what the article
/// storage persists: internally tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Header {
        level: u8,
        content: String,
    },
    Paragraph {
        content: String,
    },
    Callout {
        variant: CalloutVariant,
        title: String,
        content: String,
    },
    List {
        items: Vec<String>,
    },
    /// Raw code; `content` is never inline-processed.
    Code {
        language: String,
        title: String,
        content: String,
    },
    Quote {
        content: String,
        attribution: String,
    },
    /// An empty `src` marks a placeholder that still needs a URL.
    Image {
        src: String,
        alt: String,
        caption: String,
    },
}

/// Field-less tag for each [`ContentBlock`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Header,
    Paragraph,
    Callout,
    List,
    Code,
    Quote,
    Image,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Callout => "callout",
            Self::List => "list",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::Image => "image",
        }
    }
}

impl ContentBlock {
    /// Builds a header, clamping `level` into `1..=MAX_HEADER_LEVEL`.
    pub fn header(level: u8, content: impl Into<String>) -> Self {
        Self::Header {
            level: level.clamp(1, MAX_HEADER_LEVEL),
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::Paragraph {
            content: content.into(),
        }
    }

    pub fn callout(
        variant: CalloutVariant,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::Callout {
            variant,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Builds a list, or `None` when there are no items.
    pub fn list(items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self::List { items })
        }
    }

    /// Builds a code block titled with the capitalized language.
    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        let language = language.into();
        Self::Code {
            title: capitalize(&language),
            language,
            content: content.into(),
        }
    }

    pub fn quote(content: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self::Quote {
            content: content.into(),
            attribution: attribution.into(),
        }
    }

    pub fn image(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
            caption: caption.into(),
        }
    }

    /// The block the editor inserts when the user adds a fresh block of `kind`.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Header => Self::header(2, ""),
            BlockKind::Paragraph => Self::paragraph(""),
            BlockKind::Callout => Self::callout(CalloutVariant::Insight, "Quick Note", ""),
            BlockKind::List => Self::List {
                items: vec![String::new()],
            },
            BlockKind::Code => Self::Code {
                language: "javascript".to_string(),
                title: "Code".to_string(),
                content: String::new(),
            },
            BlockKind::Quote => Self::quote("", ""),
            BlockKind::Image => Self::image("", "", ""),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Header { .. } => BlockKind::Header,
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::Callout { .. } => BlockKind::Callout,
            Self::List { .. } => BlockKind::List,
            Self::Code { .. } => BlockKind::Code,
            Self::Quote { .. } => BlockKind::Quote,
            Self::Image { .. } => BlockKind::Image,
        }
    }

    /// The inline-markup text of blocks that carry a single `content` field.
    pub fn inline_content(&self) -> Option<&str> {
        match self {
            Self::Header { content, .. }
            | Self::Paragraph { content }
            | Self::Callout { content, .. }
            | Self::Quote { content, .. } => Some(content),
            Self::List { .. } | Self::Code { .. } | Self::Image { .. } => None,
        }
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
