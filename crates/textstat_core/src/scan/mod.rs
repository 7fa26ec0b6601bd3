//! Directory entry tally.
//!
//! # Responsibility
//! - Count plain files and directories among one directory's entries.
//!
//! # Invariants
//! - The tally is non-recursive: only immediate entries are inspected.
//! - Entries that are neither file nor directory count toward neither total.

use crate::source::{SourceError, SourceResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Counts of files and directories directly inside one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirTally {
    pub files: usize,
    pub dirs: usize,
}

/// Tallies the immediate entries of `path`.
///
/// Symlinks are resolved before classification, so a symlink to a file counts
/// as a file. Broken symlinks count as neither.
///
/// # Errors
/// Shares the [`SourceError`] family: missing or unreadable directories are
/// reported the same way as missing or unreadable files.
pub fn tally_dir(path: impl AsRef<Path>) -> SourceResult<DirTally> {
    let path = path.as_ref();
    let entries = std::fs::read_dir(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => SourceError::PermissionDenied(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let mut tally = DirTally::default();
    for entry in entries {
        let entry = entry.map_err(|err| SourceError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        let entry_path = entry.path();
        if entry_path.is_file() {
            tally.files += 1;
        }
        if entry_path.is_dir() {
            tally.dirs += 1;
        }
    }

    debug!(
        "event=dir_tally module=scan status=ok path={} files={} dirs={}",
        path.display(),
        tally.files,
        tally.dirs
    );
    Ok(tally)
}
