use chrono::{NaiveDateTime, NaiveTime};

use crate::parsing::diagnostics::MalformedReason;

use super::markers::{EntryHeader, References, Supplement};

/// What a single log line is, judged without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    EntryHeader {
        timestamp: NaiveDateTime,
        category: String,
    },
    MalformedHeader(MalformedReason),
    SupplementMarker {
        time: Option<NaiveTime>,
    },
    ReferenceMarker,
    /// A `>`-quoted line, with the quote prefix stripped.
    Quoted(&'a str),
    Blank,
    Text(&'a str),
}

/// Classifies lines for the entry parser. Marker checks take precedence
/// over quoting, so `> 📚 参照:` is never read as an ordinary quote.
pub struct EntryLineClassifier;

impl EntryLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(header) = EntryHeader::parse(line) {
            return match header {
                Ok((timestamp, category)) => LineClass::EntryHeader {
                    timestamp,
                    category,
                },
                Err(reason) => LineClass::MalformedHeader(reason),
            };
        }
        if Supplement::is_marker(line) {
            return LineClass::SupplementMarker {
                time: Supplement::time(line),
            };
        }
        if References::is_marker(line) {
            return LineClass::ReferenceMarker;
        }
        if let Some(text) = References::strip_quote(line) {
            return LineClass::Quoted(text);
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Text(line)
    }
}
