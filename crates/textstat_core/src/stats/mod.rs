//! Text statistics over a [`Document`].
//!
//! # Responsibility
//! - Compute character, line and word statistics as pure functions.
//! - Expose token and unique-word projections for callers that print them.
//!
//! # Invariants
//! - Every function here is total: no statistic can fail once content exists.
//! - `unique_word_count(doc) <= word_count(doc)` for every document.
//! - Line counting follows line-iteration semantics; newline-character
//!   counting is a separate, deliberately distinct operation.

use crate::model::document::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid token regex"));

/// Aggregate statistics report for one document.
///
/// Field names are the stable wire shape used by JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Count of Unicode scalar values in the content (not bytes).
    pub characters: usize,
    /// Count of line segments, per [`line_count`] semantics.
    pub lines: usize,
    /// Count of `\n` characters, per [`newline_count`] semantics.
    pub newlines: usize,
    /// Count of whitespace-separated tokens.
    pub words: usize,
    /// Count of distinct tokens (exact-match, case-sensitive).
    pub unique_words: usize,
}

/// Returns the length of the document's character sequence.
///
/// Characters are Unicode scalar values; a multi-byte UTF-8 sequence counts
/// as one character.
pub fn char_count(doc: &Document) -> usize {
    doc.content().chars().count()
}

/// Returns the number of line segments in the document.
///
/// A segment terminated by `\n` counts as one line, and a final segment
/// without a trailing terminator still counts as one line:
///
/// - `"line1\nline2\nline3"` has 3 lines.
/// - `"line1\nline2\nline3\n"` also has 3 lines, not 4.
/// - `""` has 0 lines.
///
/// This is the primary line-count definition. It intentionally differs from
/// [`newline_count`], which reports one less than this function whenever the
/// final segment lacks a trailing terminator.
pub fn line_count(doc: &Document) -> usize {
    doc.content().lines().count()
}

/// Returns the number of `\n` characters in the document.
///
/// Kept as a distinct operation rather than an alias: for content whose final
/// segment has no trailing newline, this undercounts [`line_count`] by exactly
/// one. Callers that want "how many lines" should use [`line_count`]; this
/// function answers "how many terminators".
pub fn newline_count(doc: &Document) -> usize {
    doc.content().chars().filter(|ch| *ch == '\n').count()
}

/// Returns the number of whitespace-separated tokens in the document.
///
/// Tokens are maximal runs of non-whitespace characters; empty tokens cannot
/// occur.
pub fn word_count(doc: &Document) -> usize {
    TOKEN_RE.find_iter(doc.content()).count()
}

/// Returns the number of distinct tokens in the document.
///
/// Comparison is exact-match and case-sensitive: `Word` and `word` are two
/// distinct tokens.
pub fn unique_word_count(doc: &Document) -> usize {
    word_set(doc).len()
}

/// Returns every token in document order.
pub fn tokens(doc: &Document) -> Vec<&str> {
    TOKEN_RE
        .find_iter(doc.content())
        .map(|token| token.as_str())
        .collect()
}

/// Returns the set of distinct tokens, ordered for deterministic output.
///
/// Recomputed on demand; never cached on the document.
pub fn word_set(doc: &Document) -> BTreeSet<&str> {
    TOKEN_RE
        .find_iter(doc.content())
        .map(|token| token.as_str())
        .collect()
}

/// Computes the full statistics report for one document.
pub fn analyze(doc: &Document) -> TextStatistics {
    let report = TextStatistics {
        characters: char_count(doc),
        lines: line_count(doc),
        newlines: newline_count(doc),
        words: word_count(doc),
        unique_words: unique_word_count(doc),
    };
    debug_assert!(report.unique_words <= report.words);
    report
}
