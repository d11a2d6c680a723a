pub mod content_block;

pub use content_block::{BlockKind, CalloutVariant, ContentBlock, MAX_HEADER_LEVEL, capitalize};
