// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_plain_paste(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n2. Numbered item\n\n> Fold pre -- Coach\n\n:::tip Patience\nWait for spots\n:::\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\nhttps://example.com/chart.png\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_html_paste(size: usize) -> String {
    let base = "<h2>Section</h2><p>Paragraph with <strong>bold</strong> and <a href=\"https://example.com\">a link</a>.</p><ul><li>One</li><li><em>Two</em></li></ul><aside>💡 Note</aside><pre><code class=\"language-rust\">let x = 1;</code></pre>";
    format!("<div>{}</div>", base.repeat(size))
}
