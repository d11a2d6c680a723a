/// Link inline type: `[text](href)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';

    /// Appends `[text](href)` to `out`.
    pub fn write(out: &mut String, text: &str, href: &str) {
        out.push(Self::TEXT_OPEN as char);
        out.push_str(text);
        out.push(Self::TEXT_CLOSE as char);
        out.push(Self::HREF_OPEN as char);
        out.push_str(href);
        out.push(Self::HREF_CLOSE as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_link() {
        let mut out = String::from("see ");
        Link::write(&mut out, "docs", "https://docs.rs");
        assert_eq!(out, "see [docs](https://docs.rs)");
    }
}
