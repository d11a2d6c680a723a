//! # Inline Markup
//!
//! The compact micro-syntax carried in block text fields: `***bold italic***`,
//! `**bold**`, `*italic*`, `` `code` `` and `[text](href)`.
//!
//! ## Architecture
//!
//! One grammar, one encoder, one decoder:
//! - the HTML parser encodes inline elements into this syntax
//!   (`parsing::html::to_inline_markup`)
//! - `parser::parse_inline` decodes it into span-based [`InlineNode`]s
//! - `render` turns decoded nodes into HTML fragments for display
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the markup text
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: delimiter constants shared by encoder and decoder
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`parser`**: `parse_inline()` with `try_parse_*` helpers
//! - **`render`**: `render_html()` and `to_plain_text()`

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod span;
pub mod types;

pub use parser::parse_inline;
pub use render::{render_html, to_plain_text};
pub use span::Span;
pub use types::InlineNode;
