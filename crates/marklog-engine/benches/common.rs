// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_learning_log(entries: usize) -> String {
    let categories = ["メモ", "学習", "気づき", "問題"];
    let mut content = String::from("# Learning Log\n\n## エントリー\n");

    for i in 0..entries {
        let day = 1 + (i % 28);
        let hour = i % 24;
        let category = categories[i % categories.len()];
        content.push_str(&format!(
            "\n### 2024-01-{day:02} {hour:02}:00 - {category}\nEntry number {i} with some text.\n"
        ));
        if i % 3 == 0 {
            content.push_str(&format!(
                "\n**🤖 AI補足 ({hour:02}:30):**\nA supplement for entry {i}.\nIt spans two lines.\n"
            ));
        }
        if i % 5 == 0 {
            content.push_str("\n> 📚 参照:\n> https://example.com/a\n> https://example.com/b\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_frontmatter(keys: usize) -> String {
    let mut content = String::from("---\n");
    for i in 0..keys {
        if i % 4 == 0 {
            content.push_str(&format!("key{i}: |\n  first line\n  second line\n"));
        } else {
            content.push_str(&format!("key{i}: value {i}\n"));
        }
    }
    content.push_str("---\n\n# Body\n");
    content
}
