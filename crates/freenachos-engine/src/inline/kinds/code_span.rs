/// Code span inline type with owned delimiter constant.
///
/// The body is taken literally; no emphasis or links are recognized inside.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIM: &'static str = "`";
}
