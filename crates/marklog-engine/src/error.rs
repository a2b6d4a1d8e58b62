use thiserror::Error;

/// Failures caused by how the engine was called, as opposed to what the
/// document contains. Recoverable document problems are diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown granularity: {0} (expected day, week or month)")]
    UnknownGranularity(String),
    #[error("Document has no header block")]
    MissingHeader,
    #[error("Invalid category: {category} (valid categories: {valid})")]
    UnknownCategory { category: String, valid: String },
}
