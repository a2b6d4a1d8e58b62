pub mod header_block;
pub mod log_entry;
pub mod vocabulary;

pub use header_block::HeaderBlock;
pub use log_entry::LogEntry;
pub use vocabulary::CategoryVocabulary;
