use super::document::Document;

/// A forward-only cursor over the lines of a [`Document`].
///
/// Peeking past the end returns `None` rather than panicking, so parsers can
/// use `while let Some(line) = scanner.peek()` as their only loop condition.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    doc: &'a Document,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc, pos: 0 }
    }

    /// Total number of lines in the underlying document.
    pub fn len(&self) -> usize {
        self.doc.line_count()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    /// Index of the line under the cursor (0-based).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Human-facing number of the line under the cursor (1-based).
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.doc.line_count()
    }

    /// The line under the cursor, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_at(0)
    }

    /// The line `offset` lines ahead of the cursor, without consuming anything.
    pub fn peek_at(&self, offset: usize) -> Option<&'a str> {
        self.doc.line(self.pos.checked_add(offset)?)
    }

    /// Consumes and returns the line under the cursor.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.doc.line(self.pos)?;
        self.pos += 1;
        Some(line)
    }
}
