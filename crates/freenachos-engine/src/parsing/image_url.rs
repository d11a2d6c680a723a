//! Bare image URL detection shared by the plain-text and HTML parsers.
//!
//! Exactly two shapes count as an image reference:
//! - a standard URL whose path ends in an image extension, optionally
//!   followed by a query string
//! - a Supabase storage object URL, whatever its extension

use std::sync::OnceLock;

use regex::Regex;

fn standard_image_regex() -> &'static Regex {
    static STANDARD: OnceLock<Regex> = OnceLock::new();
    STANDARD.get_or_init(|| {
        Regex::new(r"(?i)^https?://\S+\.(?:jpg|jpeg|png|gif|webp|svg)(?:\?\S*)?$")
            .expect("Invalid image URL regex")
    })
}

fn supabase_storage_regex() -> &'static Regex {
    static SUPABASE: OnceLock<Regex> = OnceLock::new();
    SUPABASE.get_or_init(|| {
        Regex::new(r"^https?://[^/]+\.supabase\.co/storage/v1/object/\S+$")
            .expect("Invalid storage URL regex")
    })
}

/// Returns the URL when the whole (trimmed) input is an image reference.
pub fn extract_image_url(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if standard_image_regex().is_match(trimmed) || supabase_storage_regex().is_match(trimmed) {
        Some(trimmed)
    } else {
        None
    }
}

pub fn is_image_url(line: &str) -> bool {
    extract_image_url(line).is_some()
}
