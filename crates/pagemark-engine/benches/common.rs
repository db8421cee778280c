// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with **bold**, `code`{lang='rust'} and [a link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n| Name | Value |\n| :-- | --: |\n| a | 1 |\n\n::callout{color=\"info\"}\n1. First\n2. Second\n::\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_line(repeats: usize) -> String {
    "Some *italic*, ~~struck~~, ==marked== and $x^2$ text with :kbd{value=\"K\"}. ".repeat(repeats)
}
