//! # Inline Kinds
//!
//! Inline constructs that own their delimiters. Both the HTML converter
//! (encoder) and the inline parser (decoder) read them from here, so the two
//! sides of the micro-syntax cannot drift apart.
//!
//! - **`StrongEmphasis`**: `***text***`
//! - **`Strong`**: `**text**`
//! - **`Emphasis`**: `*text*`
//! - **`CodeSpan`**: `` `text` ``
//! - **`Link`**: `[text](href)`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong, StrongEmphasis};
pub use link::Link;
