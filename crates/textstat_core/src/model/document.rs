//! Document domain model.
//!
//! # Responsibility
//! - Hold the full text of one source as an immutable character sequence.
//! - Carry the origin path, when known, for diagnostics only.
//!
//! # Invariants
//! - Content is fixed at construction time; there are no mutators.
//! - The origin path never influences any statistic.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Immutable text content of one source.
///
/// A document is ephemeral: it lives for the duration of a computation and is
/// never persisted. Every statistic is a pure function of `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Origin path when the document was read from the filesystem.
    source: Option<PathBuf>,
    /// Full text of the source.
    content: String,
}

impl Document {
    /// Creates a document from in-memory content with no origin path.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            source: None,
            content: content.into(),
        }
    }

    /// Creates a document read from `source`.
    ///
    /// Used by the file-reading boundary; identity of the path is recorded
    /// verbatim and never normalized here.
    pub fn with_source(source: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            content: content.into(),
        }
    }

    /// Returns the full text of the document.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the origin path, when the document came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns whether the document holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::from_content(value)
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::from_content(value)
    }
}
