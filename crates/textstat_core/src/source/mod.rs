//! Filesystem source boundary.
//!
//! # Responsibility
//! - Read whole text sources into immutable [`Document`] values.
//! - Map filesystem failures into one stable error family.
//!
//! # Invariants
//! - Failures surface immediately; there is no retry policy.
//! - Statistics code never touches the filesystem; only this module does.

use crate::model::document::Document;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type SourceResult<T> = Result<T, SourceError>;

/// Error family for unavailable sources.
///
/// Covers every way a source can fail to yield a character sequence: the
/// path does not exist, cannot be opened, or does not decode.
#[derive(Debug)]
pub enum SourceError {
    /// No file or directory exists at the path.
    NotFound(PathBuf),
    /// The path exists but the process may not read it.
    PermissionDenied(PathBuf),
    /// The file's bytes are not valid UTF-8.
    InvalidEncoding(PathBuf),
    /// Any other I/O failure, with the underlying error attached.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "source not found: `{}`", path.display()),
            Self::PermissionDenied(path) => {
                write!(f, "source not readable: `{}`", path.display())
            }
            Self::InvalidEncoding(path) => {
                write!(f, "source is not valid UTF-8: `{}`", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to read source `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl SourceError {
    fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            ErrorKind::InvalidData => Self::InvalidEncoding(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Reads the file at `path` into a document, requiring valid UTF-8.
///
/// # Errors
/// - [`SourceError::NotFound`] when the path does not exist.
/// - [`SourceError::PermissionDenied`] when the file cannot be opened.
/// - [`SourceError::InvalidEncoding`] when the bytes do not decode as UTF-8.
/// - [`SourceError::Io`] for any other read failure.
pub fn read_document(path: impl AsRef<Path>) -> SourceResult<Document> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|err| SourceError::from_io(path, err))?;

    debug!(
        "event=source_read module=source status=ok mode=strict path={} chars={}",
        path.display(),
        content.chars().count()
    );
    Ok(Document::with_source(path, content))
}

/// Reads the file at `path` into a document, replacing invalid bytes.
///
/// Undecodable byte sequences become U+FFFD instead of failing, so character
/// counts over the result reflect the replacement characters, not the raw
/// bytes. Missing or unreadable files still error.
pub fn read_document_lossy(path: impl AsRef<Path>) -> SourceResult<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| SourceError::from_io(path, err))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    debug!(
        "event=source_read module=source status=ok mode=lossy path={} chars={}",
        path.display(),
        content.chars().count()
    );
    Ok(Document::with_source(path, content))
}
