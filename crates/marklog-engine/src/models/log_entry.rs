use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::render::{render_entry, render_references, render_supplement};

/// One timestamped, categorized record from an append-only log.
///
/// Constructed by the entry parser and never mutated afterwards. Entries are
/// ordered by file position; nothing here assumes timestamps are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    timestamp: NaiveDateTime,
    category: String,
    content: String,
    supplement: Option<String>,
    supplement_time: Option<NaiveTime>,
    references: Option<String>,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            category: category.into(),
            content: content.into(),
            supplement: None,
            supplement_time: None,
            references: None,
        }
    }

    pub fn with_supplement(mut self, text: impl Into<String>, time: Option<NaiveTime>) -> Self {
        self.supplement = Some(text.into());
        self.supplement_time = time;
        self
    }

    pub fn with_references(mut self, text: impl Into<String>) -> Self {
        self.references = Some(text.into());
        self
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Primary body text; empty when the header had nothing under it.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn supplement(&self) -> Option<&str> {
        self.supplement.as_deref()
    }

    /// Time written in the supplement marker, e.g. `(09:05)`.
    pub fn supplement_time(&self) -> Option<NaiveTime> {
        self.supplement_time
    }

    pub fn references(&self) -> Option<&str> {
        self.references.as_deref()
    }

    /// Renders the entry back into log text. Parsing the result yields an
    /// equal entry.
    pub fn to_markdown(&self) -> String {
        let mut out = render_entry(self.timestamp, &self.category, &self.content);
        match (&self.supplement, &self.references) {
            (Some(supplement), references) => out.push_str(&render_supplement(
                self.supplement_time,
                supplement,
                references.as_deref(),
            )),
            (None, Some(references)) => out.push_str(&render_references(references)),
            (None, None) => {}
        }
        out
    }
}
