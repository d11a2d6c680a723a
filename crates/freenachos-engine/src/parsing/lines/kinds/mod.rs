//! # Line Kinds
//!
//! Each construct of pasted plain text owns its markers and matching rules.
//! The scanner in [`super`] asks these types; it never hardcodes `#`, `>`,
//! `:::` or a fence.

pub mod block_quote;
pub mod callout;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod markdown_image;

pub use block_quote::BlockQuote;
pub use callout::{Callout, CalloutOpen};
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use markdown_image::MarkdownImage;
