//! # Parsing
//!
//! Line-oriented parsers for the two document shapes marklog understands:
//! a frontmatter header block (`header`) and an append-only log of dated
//! entries (`entries`). Both read a [`Document`] through a [`LineScanner`]
//! and return their result together with any [`Diagnostic`]s.

pub mod diagnostics;
pub mod document;
pub mod entries;
pub mod header;
pub mod rope;
pub mod scanner;

pub use diagnostics::{Diagnostic, DiagnosticKind, MalformedReason, Parsed, Severity};
pub use document::Document;
pub use entries::{EntryParser, parse_entries, parse_entries_with};
pub use header::{body_start, parse_header, require_header};
pub use scanner::LineScanner;

#[cfg(test)]
mod tests;
