/// Bold and italic at once: `***text***`.
pub struct StrongEmphasis;

impl StrongEmphasis {
    pub const DELIM: &'static str = "***";
}

/// Bold: `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// Italic: `*text*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
}
