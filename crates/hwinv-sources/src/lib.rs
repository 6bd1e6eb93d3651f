//! hwinv-sources — where reports come from.
//!
//! A [`ReportSource`] enumerates report locations and loads each one into a
//! [`hwinv_core::RawReport`]. The only production source is
//! [`DirectorySource`], which walks a directory tree; tests substitute
//! in-memory sources through the same trait.

pub mod directory;
pub mod identity;

pub use directory::DirectorySource;
pub use identity::identity_for;

use hwinv_core::RawReport;
use std::path::{Path, PathBuf};

/// Errors raised while discovering or reading reports.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("report root {0} does not exist or is not a directory")]
    RootNotFound(PathBuf),
    #[error("failed to read report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait implemented by each report source.
///
/// `load` is called once per discovered path, possibly from several threads
/// at once.
pub trait ReportSource: Send + Sync {
    /// Report paths in a stable order; the order becomes the row order.
    fn discover(&self) -> Result<Vec<PathBuf>, SourceError>;

    /// Read one report.
    fn load(&self, path: &Path) -> Result<RawReport, SourceError>;
}

/// Read `path` as a report, replacing invalid UTF-8 rather than failing.
pub fn read_report(path: &Path) -> Result<RawReport, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(RawReport::new(path, text))
}
