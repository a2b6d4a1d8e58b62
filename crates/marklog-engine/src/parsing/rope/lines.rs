use xi_rope::Rope;

use super::span::Span;

/// A single line of the rope with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the terminator if present).
    pub span: Span,
    /// The line text with `\n` / `\r\n` stripped.
    pub text: String,
}

/// Returns an iterator over newline-normalized lines with their byte spans.
///
/// Uses `lines_raw` so the spans still cover the terminators, then strips
/// `\r` and `\n` from the text handed to the parsers.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.trim_end_matches(['\r', '\n']).to_string(),
        }
    })
}
