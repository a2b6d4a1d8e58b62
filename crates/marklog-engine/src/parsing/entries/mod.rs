//! # Entry Parsing
//!
//! Two-phase parsing of append-only logs:
//!
//! 1. **Line Classification** (`classify`): each line is classified on its
//!    own into a `LineClass` (entry header, supplement marker, reference
//!    marker, quoted line, blank, text)
//! 2. **Entry Construction** (`parser`): `EntryParser` runs a small state
//!    machine over the classified lines and finalizes an `EntryBuilder`
//!    into a `LogEntry` at each header boundary and at end of input
//!
//! ## Modules
//!
//! - **`markers`**: structural tokens (`EntryHeader`, `Supplement`, `References`)
//! - **`classify`**: `EntryLineClassifier`
//! - **`builder`**: the entry under construction
//! - **`parser`**: `EntryParser` iterator and the `parse_entries` helpers
//!
//! ## Key Invariants
//!
//! - Entries come out in file order, never sorted by timestamp
//! - A malformed header is skipped with a diagnostic; the entry before it is
//!   finalized and lines up to the next valid header are dropped
//! - A reference block ends at the first line not starting with `>`; a blank
//!   line therefore ends it, while a bare `>` keeps it going

pub(crate) mod builder;
pub mod classify;
pub mod markers;
pub mod parser;

pub use classify::{EntryLineClassifier, LineClass};
pub use parser::{EntryParser, parse_entries, parse_entries_with};
