//! Structural tokens of the log format. All syntax knowledge about entry
//! headers and attached blocks lives here, not in the classifier or parser.

use std::sync::OnceLock;

use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::parsing::diagnostics::MalformedReason;

/// `### YYYY-MM-DD HH:MM - Category`
pub struct EntryHeader;

impl EntryHeader {
    pub const PREFIX: &'static str = "### ";
    pub const SEPARATOR: &'static str = " - ";
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M";

    fn stamp_regex() -> &'static Regex {
        static STAMP: OnceLock<Regex> = OnceLock::new();
        STAMP.get_or_init(|| {
            Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("Invalid timestamp regex")
        })
    }

    fn date_prefix_regex() -> &'static Regex {
        static DATE: OnceLock<Regex> = OnceLock::new();
        DATE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\b").expect("Invalid date prefix regex"))
    }

    /// Parses an entry header line.
    ///
    /// Returns `None` for lines that are not header candidates at all: no
    /// prefix, or a prefix followed by neither a separator nor a
    /// `YYYY-MM-DD` date. `### Notes` and `### 2024 roadmap` are ordinary
    /// headings.
    pub fn parse(line: &str) -> Option<Result<(NaiveDateTime, String), MalformedReason>> {
        let rest = line.strip_prefix(Self::PREFIX)?.trim_end();
        let split = rest
            .split_once(Self::SEPARATOR)
            .or_else(|| rest.strip_suffix(Self::SEPARATOR.trim_end()).map(|s| (s, "")));

        let Some((stamp, category)) = split else {
            if Self::date_prefix_regex().is_match(rest) {
                return Some(Err(MalformedReason::MissingSeparator));
            }
            return None;
        };

        let stamp = stamp.trim();
        let timestamp = Self::stamp_regex()
            .is_match(stamp)
            .then(|| NaiveDateTime::parse_from_str(stamp, Self::TIMESTAMP_FORMAT).ok())
            .flatten();
        let Some(timestamp) = timestamp else {
            return Some(Err(MalformedReason::InvalidTimestamp(stamp.to_string())));
        };

        let category = category.trim();
        if category.is_empty() {
            return Some(Err(MalformedReason::EmptyCategory));
        }
        Some(Ok((timestamp, category.to_string())))
    }
}

/// `**🤖 AI補足 (HH:MM):**`
pub struct Supplement;

impl Supplement {
    pub const PREFIX: &'static str = "**🤖";
    pub const LABEL: &'static str = "AI補足";
    pub const TIME_FORMAT: &'static str = "%H:%M";

    pub fn is_marker(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// The `(HH:MM)` noted in the marker, if present and valid.
    pub fn time(line: &str) -> Option<NaiveTime> {
        static TIME: OnceLock<Regex> = OnceLock::new();
        let re = TIME.get_or_init(|| Regex::new(r"\((\d{2}:\d{2})\)").expect("Invalid time regex"));
        let caps = re.captures(line)?;
        NaiveTime::parse_from_str(caps.get(1)?.as_str(), Self::TIME_FORMAT).ok()
    }
}

/// `> 📚 参照:` followed by `>`-quoted lines.
pub struct References;

impl References {
    pub const PREFIX: &'static str = "> 📚";
    pub const LABEL: &'static str = "参照:";
    pub const QUOTE: char = '>';

    pub fn is_marker(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one quote prefix and one following space; `None` if unquoted.
    pub fn strip_quote(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::QUOTE)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
