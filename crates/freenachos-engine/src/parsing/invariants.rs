use crate::models::{ContentBlock, MAX_HEADER_LEVEL};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Header levels are within `1..=MAX_HEADER_LEVEL`
/// - Lists carry at least one item
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[ContentBlock]) {
    for (i, b) in blocks.iter().enumerate() {
        match b {
            ContentBlock::Header { level, .. } => assert!(
                (1..=MAX_HEADER_LEVEL).contains(level),
                "header level out of range at block {i}: {level}"
            ),
            ContentBlock::List { items } => {
                assert!(!items.is_empty(), "empty list at block {i}")
            }
            _ => {}
        }
    }
}
