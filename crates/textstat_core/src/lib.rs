//! Core domain logic for textstat.
//! This crate is the single source of truth for counting semantics.

pub mod inventory;
pub mod logging;
pub mod model;
pub mod scan;
pub mod source;
pub mod stats;

pub use inventory::{missing_item_lines, split_items};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::Document;
pub use scan::{tally_dir, DirTally};
pub use source::{read_document, read_document_lossy, SourceError, SourceResult};
pub use stats::{
    analyze, char_count, line_count, newline_count, tokens, unique_word_count, word_count,
    word_set, TextStatistics,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
