pub mod editing;
pub mod inline;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{ArticleDraft, Cmd, EditError, ImportOptions, ImportSummary, MoveDirection, Patch};
pub use inline::{parse_inline, render_html};
pub use models::{BlockKind, CalloutVariant, ContentBlock};
pub use parsing::{ParseError, PasteFormat, parse_as, parse_paste};
