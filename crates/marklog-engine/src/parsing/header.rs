//! # Header Blocks
//!
//! Frontmatter parsing: a `---` delimited block of `key: value` lines at the
//! very start of a document.
//!
//! - A value of `|` opens a literal block. Following lines indented by at
//!   least [`INDENT`] are trimmed and joined with `\n`; the first unindented
//!   line closes it and is read as a fresh line.
//! - Indented or colon-less lines after a plain value fold onto that value.
//! - Later duplicates of a key win.
//! - A missing opening or closing delimiter means "no header", not an error.

use crate::error::ParseError;
use crate::models::HeaderBlock;

use super::diagnostics::{DiagnosticKind, DiagnosticLog, Parsed};
use super::document::Document;
use super::scanner::LineScanner;

pub const DELIMITER: &str = "---";
pub const LITERAL_MARKER: &str = "|";
pub const INDENT: &str = "  ";

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Value currently receiving lines.
#[derive(Debug)]
enum OpenValue {
    Closed,
    Plain {
        key: String,
        line: usize,
        lines: Vec<String>,
    },
    Literal {
        key: String,
        line: usize,
        lines: Vec<String>,
    },
}

struct HeaderBuilder {
    block: HeaderBlock,
    open: OpenValue,
    diagnostics: DiagnosticLog,
}

impl HeaderBuilder {
    fn new() -> Self {
        Self {
            block: HeaderBlock::new(),
            open: OpenValue::Closed,
            diagnostics: DiagnosticLog::default(),
        }
    }

    fn push(&mut self, number: usize, line: &str) {
        let indented = line.starts_with(INDENT);

        if let OpenValue::Plain { lines, .. } | OpenValue::Literal { lines, .. } = &mut self.open
            && indented
        {
            lines.push(line.trim().to_string());
            return;
        }

        if line.trim().is_empty() {
            if matches!(self.open, OpenValue::Literal { .. }) {
                self.close();
            }
            return;
        }

        if matches!(self.open, OpenValue::Literal { .. }) {
            self.close();
        }

        match line.trim().split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.close();
                let key = key.trim().to_string();
                let value = value.trim();
                self.open = if value == LITERAL_MARKER {
                    OpenValue::Literal {
                        key,
                        line: number,
                        lines: vec![],
                    }
                } else {
                    let lines = if value.is_empty() {
                        vec![]
                    } else {
                        vec![value.to_string()]
                    };
                    OpenValue::Plain {
                        key,
                        line: number,
                        lines,
                    }
                };
            }
            _ => match &mut self.open {
                OpenValue::Plain { lines, .. } => lines.push(line.trim().to_string()),
                _ => self.diagnostics.push(number, DiagnosticKind::StrayHeaderLine),
            },
        }
    }

    /// Stores the open value, if any.
    fn close(&mut self) {
        let (key, line, lines) = match std::mem::replace(&mut self.open, OpenValue::Closed) {
            OpenValue::Closed => return,
            OpenValue::Plain { key, line, lines } | OpenValue::Literal { key, line, lines } => {
                (key, line, lines)
            }
        };
        let value = lines.join("\n").trim_matches('\n').to_string();
        if self.block.insert(key.clone(), value).is_some() {
            self.diagnostics.push(line, DiagnosticKind::DuplicateKey { key });
        }
    }

    fn finish(mut self) -> Parsed<HeaderBlock> {
        self.close();
        Parsed {
            value: self.block,
            diagnostics: self.diagnostics.into_vec(),
        }
    }
}

/// Parses the header block at the top of `doc`.
///
/// Returns `None` when line 0 is not a delimiter or no closing delimiter
/// follows. An empty block yields an empty [`HeaderBlock`].
pub fn parse_header(doc: &Document) -> Parsed<Option<HeaderBlock>> {
    let mut scanner = LineScanner::new(doc);
    if !scanner.peek().is_some_and(is_delimiter) {
        return Parsed::new(None);
    }
    let Some(closing) = (1..scanner.len()).find(|&i| scanner.peek_at(i).is_some_and(is_delimiter))
    else {
        return Parsed::new(None);
    };

    scanner.bump();
    let mut builder = HeaderBuilder::new();
    while scanner.position() < closing {
        let number = scanner.line_number();
        let Some(line) = scanner.bump() else { break };
        builder.push(number, line);
    }
    builder.finish().map(Some)
}

/// Like [`parse_header`], for callers that cannot proceed without a header.
pub fn require_header(doc: &Document) -> Result<Parsed<HeaderBlock>, ParseError> {
    let parsed = parse_header(doc);
    match parsed.value {
        Some(block) => Ok(Parsed {
            value: block,
            diagnostics: parsed.diagnostics,
        }),
        None => Err(ParseError::MissingHeader),
    }
}

/// Index of the first line after the header block, or 0 when there is none.
pub fn body_start(doc: &Document) -> usize {
    let scanner = LineScanner::new(doc);
    if !scanner.peek().is_some_and(is_delimiter) {
        return 0;
    }
    (1..scanner.len())
        .find(|&i| scanner.peek_at(i).is_some_and(is_delimiter))
        .map_or(0, |closing| closing + 1)
}
