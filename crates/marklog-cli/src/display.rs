use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use marklog_engine::{HeaderBlock, LogEntry, Summary};

const RULE_WIDTH: usize = 60;
const SUPPLEMENT_PREVIEW: usize = 100;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Truncates to `max` characters, appending `...` when anything was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

pub fn entries(title: &str, entries: &[&LogEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}\n{title} ({} entries)\n{}\n", rule(), entries.len(), rule());
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}] {}",
            i + 1,
            entry.category(),
            entry.timestamp().format("%Y-%m-%d %H:%M")
        );
        for line in entry.content().lines() {
            let _ = writeln!(out, "   {line}");
        }
        if let Some(supplement) = entry.supplement() {
            let _ = writeln!(
                out,
                "   💡 Supplement: {}",
                truncate_chars(&supplement.replace('\n', " "), SUPPLEMENT_PREVIEW)
            );
        }
        out.push('\n');
    }
    out
}

pub fn entry_detail(entry: &LogEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}\n📝 Latest entry\n{}", rule(), rule());
    let _ = writeln!(out, "Category: {}", entry.category());
    let _ = writeln!(out, "Time: {}", entry.timestamp().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{}", entry.content());
    if let Some(supplement) = entry.supplement() {
        let _ = writeln!(out, "\n🤖 {supplement}");
    }
    if let Some(references) = entry.references() {
        let _ = writeln!(out, "\n📚 {}", references.replace('\n', "\n   "));
    }
    let _ = writeln!(out, "{}", rule());
    out
}

pub fn summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n📊 Learning log summary\n{}", rule());
    let _ = writeln!(out, "Total entries: {}", summary.count);
    if let (Some(earliest), Some(latest)) = (summary.earliest, summary.latest) {
        let _ = writeln!(
            out,
            "Period: {} ~ {}",
            earliest.format("%Y-%m-%d"),
            latest.format("%Y-%m-%d")
        );
    }
    if !summary.per_category.is_empty() {
        let _ = writeln!(out, "\nBy category:");
        for (category, count) in &summary.per_category {
            let _ = writeln!(out, "  {category}: {count}");
        }
    }
    out
}

pub fn groups<K: AsRef<str>>(icon: &str, groups: &BTreeMap<K, Vec<&LogEntry>>) -> String {
    groups
        .iter()
        .map(|(key, group)| entries(&format!("{icon} {}", key.as_ref()), group))
        .collect()
}

pub fn header(path: &Path, block: &HeaderBlock) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", path.display());
    if block.is_empty() {
        let _ = writeln!(out, "  (empty header)");
    }
    for (key, value) in block.iter() {
        let mut lines = value.lines();
        let _ = writeln!(out, "  {key}: {}", lines.next().unwrap_or(""));
        for line in lines {
            let _ = writeln!(out, "  {:width$}  {line}", "", width = key.len());
        }
    }
    out
}
