pub mod aggregate;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use aggregate::*;
pub use error::ParseError;
pub use io::*;
pub use models::*;
pub use parsing::{
    Diagnostic, DiagnosticKind, Document, EntryParser, LineScanner, MalformedReason, Parsed,
    Severity, body_start, parse_entries, parse_entries_with, parse_header, require_header,
};
pub use render::*;
