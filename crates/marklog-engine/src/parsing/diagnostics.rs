use std::fmt;

use serde::Serialize;

/// Why an entry header line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// The ` - ` between timestamp and category is missing.
    MissingSeparator,
    /// The stamp is not a real `YYYY-MM-DD HH:MM` date-time.
    InvalidTimestamp(String),
    EmptyCategory,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing ' - ' separator"),
            Self::InvalidTimestamp(stamp) => write!(f, "unparsable timestamp '{stamp}'"),
            Self::EmptyCategory => write!(f, "empty category"),
        }
    }
}

/// A sub-block that can hang off a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachedBlock {
    Supplement,
    References,
}

impl fmt::Display for AttachedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supplement => write!(f, "supplement"),
            Self::References => write!(f, "reference"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An entry header that could not be parsed; the entry was skipped.
    MalformedHeader { reason: MalformedReason },
    /// A category outside the caller's vocabulary; the entry is still kept.
    UnknownCategory { category: String },
    /// A header key seen twice; the later value won.
    DuplicateKey { key: String },
    /// A header-block line that is neither `key: value` nor a continuation.
    StrayHeaderLine,
    /// A supplement or reference marker with no entry to attach to.
    OrphanBlock { block: AttachedBlock },
    /// Text after a reference block, or after a quote that closed a
    /// supplement, that belongs to no section.
    StrayLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            Self::MalformedHeader { .. }
            | Self::UnknownCategory { .. }
            | Self::OrphanBlock { .. } => Severity::Warning,
            Self::DuplicateKey { .. } | Self::StrayHeaderLine | Self::StrayLine => Severity::Info,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { reason } => write!(f, "skipped malformed entry header: {reason}"),
            Self::UnknownCategory { category } => write!(f, "unknown category '{category}'"),
            Self::DuplicateKey { key } => write!(f, "duplicate key '{key}', later value wins"),
            Self::StrayHeaderLine => write!(f, "ignored header line without a key"),
            Self::OrphanBlock { block } => write!(f, "{block} block before any entry was ignored"),
            Self::StrayLine => write!(f, "ignored text outside any entry section"),
        }
    }
}

/// A problem the parser recovered from, tied to its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// A parse result together with every diagnostic recorded while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// True when nothing had to be recovered from.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}

/// Ordered diagnostic collector that mirrors each entry to the `log` facade.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticLog(Vec<Diagnostic>);

impl DiagnosticLog {
    pub(crate) fn push(&mut self, line: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { line, kind };
        match diagnostic.severity() {
            Severity::Warning => log::warn!("{diagnostic}"),
            Severity::Info => log::debug!("{diagnostic}"),
        }
        self.0.push(diagnostic);
    }

    pub(crate) fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
