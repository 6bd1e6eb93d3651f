//! Pre-run removal of a previous output file.

use crate::ExportError;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    Absent,
}

/// Delete `path` if it exists.
///
/// A missing file is fine. Permission failures become
/// [`ExportError::Locked`], which on Windows is what an open spreadsheet
/// produces.
pub fn remove_stale(path: &Path) -> Result<Removal, ExportError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "old output removed");
            Ok(Removal::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Absent),
        Err(e) => Err(ExportError::from_io(path, e)),
    }
}
