use xi_rope::Rope;

use super::rope::{LineRef, Span, lines_with_spans};

/// An immutable, newline-normalized sequence of lines.
///
/// Built once from an input buffer and only ever read by the parsers. Line
/// indices are stable for the lifetime of the value, so any number of
/// scanners can walk the same document independently.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    lines: Vec<LineRef>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        let rope = Rope::from(text);
        let lines = lines_with_spans(&rope).collect();
        Self { rope, lines }
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the line at `index` (0-based), without its terminator.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.text.as_str())
    }

    /// Byte span of the line at `index`, terminator included.
    pub fn line_span(&self, index: usize) -> Option<Span> {
        self.lines.get(index).map(|l| l.span)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// Total size of the source text in bytes.
    pub fn len_bytes(&self) -> usize {
        self.rope.len()
    }

    /// Source text from the start of line `index` to the end of the document.
    ///
    /// Returns an empty string when `index` is past the last line.
    pub fn text_from_line(&self, index: usize) -> String {
        match self.line_span(index) {
            Some(sp) => self.rope.slice_to_cow(sp.through(self.rope.len())).into_owned(),
            None => String::new(),
        }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}
