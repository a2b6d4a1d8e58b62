//! # Text Sink Rendering
//!
//! Writers for the formats the parsers recognize. Output from these functions
//! parses back to the same values: a rendered header re-parses to an equal
//! [`HeaderBlock`], and a rendered entry re-parses to an equal
//! [`LogEntry`](crate::models::LogEntry).

use chrono::{NaiveDateTime, NaiveTime};

use crate::models::HeaderBlock;
use crate::parsing::entries::markers::{EntryHeader, References, Supplement};
use crate::parsing::header::{DELIMITER, INDENT, LITERAL_MARKER};

/// Initial content of a freshly created log file.
pub const LOG_TEMPLATE: &str =
    "# Learning Log\n\n## エントリー\n\n<!-- 以下に自動的にエントリーが追加されます -->\n";

/// Renders a header block including both delimiter lines.
pub fn render_header(block: &HeaderBlock) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in block.iter() {
        if value.contains('\n') || value == LITERAL_MARKER {
            out.push_str(&format!("{key}: {LITERAL_MARKER}\n"));
            for line in value.split('\n') {
                out.push_str(INDENT);
                out.push_str(line);
                out.push('\n');
            }
        } else if value.is_empty() {
            out.push_str(&format!("{key}:\n"));
        } else {
            out.push_str(&format!("{key}: {value}\n"));
        }
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
}

/// Renders a new entry, ready to be appended to a log file.
pub fn render_entry(timestamp: NaiveDateTime, category: &str, message: &str) -> String {
    format!(
        "\n{}{}{}{category}\n{message}\n",
        EntryHeader::PREFIX,
        timestamp.format(EntryHeader::TIMESTAMP_FORMAT),
        EntryHeader::SEPARATOR,
    )
}

/// Renders a supplement block, optionally followed by a reference block.
///
/// Without a `time` the marker is written bare, as `**🤖 AI補足:**`.
pub fn render_supplement(time: Option<NaiveTime>, text: &str, reference: Option<&str>) -> String {
    let stamp = time
        .map(|t| format!(" ({})", t.format(Supplement::TIME_FORMAT)))
        .unwrap_or_default();
    let mut out = format!(
        "\n{} {}{stamp}:**\n{text}\n",
        Supplement::PREFIX,
        Supplement::LABEL,
    );
    if let Some(reference) = reference {
        out.push_str(&render_references(reference));
    }
    out
}

/// Renders a reference block, quoting every line.
pub fn render_references(text: &str) -> String {
    let mut out = format!("\n{} {}\n", References::PREFIX, References::LABEL);
    for line in text.split('\n') {
        out.push(References::QUOTE);
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
