use std::ops::Range;

/// Where one line sits in the document's rope, as bytes `[start, end)`.
///
/// `end` includes the line terminator, so consecutive line spans tile the
/// whole document with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Byte length of the line including its terminator.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Range from this line's first byte up to `doc_len`, i.e. this line and
    /// everything after it.
    #[must_use]
    pub fn through(self, doc_len: usize) -> Range<usize> {
        self.start..doc_len.max(self.start)
    }
}
