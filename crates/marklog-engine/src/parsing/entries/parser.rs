use crate::models::{CategoryVocabulary, LogEntry};
use crate::parsing::diagnostics::{
    AttachedBlock, Diagnostic, DiagnosticKind, DiagnosticLog, Parsed,
};
use crate::parsing::document::Document;
use crate::parsing::scanner::LineScanner;

use super::builder::EntryBuilder;
use super::classify::{EntryLineClassifier, LineClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any section: before the first entry, after a malformed
    /// header, or after an entry's reference block ended.
    ScanningForHeader,
    AccumulatingContent,
    AccumulatingSupplement,
    AccumulatingReferences,
}

/// Lazily yields the entries of a document in file order.
///
/// Each line is classified once. Two lines close a section and are then
/// handled like any other line: the first unquoted line after a reference
/// block, and a quoted line inside a supplement. The scanner never has to
/// step backwards.
///
/// Parsing is a pure function of the document; build a new parser to start
/// over.
pub struct EntryParser<'a> {
    scanner: LineScanner<'a>,
    classifier: EntryLineClassifier,
    vocabulary: Option<&'a CategoryVocabulary>,
    state: State,
    current: Option<EntryBuilder>,
    diagnostics: DiagnosticLog,
}

impl<'a> EntryParser<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            scanner: LineScanner::new(doc),
            classifier: EntryLineClassifier,
            vocabulary: None,
            state: State::ScanningForHeader,
            current: None,
            diagnostics: DiagnosticLog::default(),
        }
    }

    /// Warn about categories outside `vocabulary`. Entries are kept either way.
    pub fn with_vocabulary(mut self, vocabulary: &'a CategoryVocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Diagnostics recorded so far, in line order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    fn check_category(&mut self, number: usize, category: &str) {
        if let Some(vocabulary) = self.vocabulary
            && !vocabulary.contains(category)
        {
            self.diagnostics.push(
                number,
                DiagnosticKind::UnknownCategory {
                    category: category.to_string(),
                },
            );
        }
    }

    fn accumulate(&mut self, number: usize, line: &str) {
        let Some(entry) = self.current.as_mut() else {
            return;
        };
        match self.state {
            State::AccumulatingContent => entry.push_content(line),
            State::AccumulatingSupplement => entry.push_supplement(line),
            State::AccumulatingReferences | State::ScanningForHeader => {
                if !line.trim().is_empty() {
                    self.diagnostics.push(number, DiagnosticKind::StrayLine);
                }
            }
        }
    }

    fn orphan(&mut self, number: usize, block: AttachedBlock) {
        self.diagnostics
            .push(number, DiagnosticKind::OrphanBlock { block });
        self.state = State::ScanningForHeader;
    }
}

impl Iterator for EntryParser<'_> {
    type Item = LogEntry;

    fn next(&mut self) -> Option<LogEntry> {
        while let Some(line) = self.scanner.peek() {
            let number = self.scanner.line_number();
            let class = self.classifier.classify(line);

            if self.state == State::AccumulatingReferences {
                if let LineClass::Quoted(text) = class {
                    if let Some(entry) = self.current.as_mut() {
                        entry.push_reference(text);
                    }
                    self.scanner.bump();
                    continue;
                }
                self.state = State::ScanningForHeader;
            }
            self.scanner.bump();

            match class {
                LineClass::EntryHeader {
                    timestamp,
                    category,
                } => {
                    self.check_category(number, &category);
                    let finished = self
                        .current
                        .replace(EntryBuilder::new(timestamp, category));
                    self.state = State::AccumulatingContent;
                    if let Some(entry) = finished {
                        return Some(entry.finish());
                    }
                }
                LineClass::MalformedHeader(reason) => {
                    self.diagnostics
                        .push(number, DiagnosticKind::MalformedHeader { reason });
                    self.state = State::ScanningForHeader;
                    if let Some(entry) = self.current.take() {
                        return Some(entry.finish());
                    }
                }
                LineClass::SupplementMarker { time } => match self.current.as_mut() {
                    Some(entry) => {
                        entry.start_supplement(time);
                        self.state = State::AccumulatingSupplement;
                    }
                    None => self.orphan(number, AttachedBlock::Supplement),
                },
                LineClass::ReferenceMarker => match self.current.as_mut() {
                    Some(entry) => {
                        entry.start_references();
                        self.state = State::AccumulatingReferences;
                    }
                    None => self.orphan(number, AttachedBlock::References),
                },
                LineClass::Quoted(_) if self.state == State::AccumulatingSupplement => {
                    // A quote closes the supplement; anything after it is stray.
                    self.state = State::ScanningForHeader;
                    self.accumulate(number, line);
                }
                LineClass::Quoted(_) | LineClass::Text(_) => self.accumulate(number, line),
                LineClass::Blank => self.accumulate(number, ""),
            }
        }

        self.state = State::ScanningForHeader;
        self.current.take().map(EntryBuilder::finish)
    }
}

/// Parses every entry in `doc`.
pub fn parse_entries(doc: &Document) -> Parsed<Vec<LogEntry>> {
    collect(EntryParser::new(doc))
}

/// Parses every entry in `doc`, warning about categories outside `vocabulary`.
pub fn parse_entries_with(doc: &Document, vocabulary: &CategoryVocabulary) -> Parsed<Vec<LogEntry>> {
    collect(EntryParser::new(doc).with_vocabulary(vocabulary))
}

fn collect(mut parser: EntryParser<'_>) -> Parsed<Vec<LogEntry>> {
    let entries = parser.by_ref().collect();
    Parsed {
        value: entries,
        diagnostics: parser.into_diagnostics(),
    }
}
