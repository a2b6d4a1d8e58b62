use chrono::{NaiveDateTime, NaiveTime};

use crate::models::LogEntry;

/// The entry under construction between two header boundaries.
///
/// Lines are stored right-trimmed. Blank lines at the edges of each section
/// are dropped when the builder is finished.
#[derive(Debug)]
pub(crate) struct EntryBuilder {
    timestamp: NaiveDateTime,
    category: String,
    content: Vec<String>,
    supplement: Vec<String>,
    supplement_time: Option<NaiveTime>,
    references: Vec<String>,
}

impl EntryBuilder {
    pub(crate) fn new(timestamp: NaiveDateTime, category: String) -> Self {
        Self {
            timestamp,
            category,
            content: vec![],
            supplement: vec![],
            supplement_time: None,
            references: vec![],
        }
    }

    pub(crate) fn push_content(&mut self, line: &str) {
        self.content.push(line.trim_end().to_string());
    }

    /// Opens a supplement section. A repeated marker appends a new paragraph.
    pub(crate) fn start_supplement(&mut self, time: Option<NaiveTime>) {
        start_section(&mut self.supplement);
        if self.supplement_time.is_none() {
            self.supplement_time = time;
        }
    }

    pub(crate) fn push_supplement(&mut self, line: &str) {
        self.supplement.push(line.trim_end().to_string());
    }

    pub(crate) fn start_references(&mut self) {
        start_section(&mut self.references);
    }

    pub(crate) fn push_reference(&mut self, text: &str) {
        self.references.push(text.trim_end().to_string());
    }

    pub(crate) fn finish(self) -> LogEntry {
        let mut entry = LogEntry::new(
            self.timestamp,
            self.category,
            join_section(&self.content).unwrap_or_default(),
        );
        if let Some(text) = join_section(&self.supplement) {
            entry = entry.with_supplement(text, self.supplement_time);
        }
        if let Some(text) = join_section(&self.references) {
            entry = entry.with_references(text);
        }
        entry
    }
}

/// Separates a repeated section from the previous one by a single blank line.
fn start_section(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
}

/// Joins lines with `\n`, dropping leading and trailing blank lines.
/// Returns `None` when nothing but blank lines remain.
fn join_section(lines: &[String]) -> Option<String> {
    let start = lines.iter().position(|l| !l.is_empty())?;
    let end = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[start..=end].join("\n"))
}
