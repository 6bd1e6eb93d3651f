//! hwinv-export — writes assembled records as a table.
//!
//! Rows are numbered (`SR#`) from 1 in the order they are handed over, so the
//! caller decides row order. Column order is fixed by [`COLUMNS`].
//!
//! Stale output is removed by an explicit [`remove_stale`] step that the CLI
//! runs before a batch starts; nothing here deletes files implicitly.

pub mod delimited;
pub mod json;
pub mod stale;

pub use stale::{remove_stale, Removal};

use hwinv_core::InventoryRecord;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output columns, in order.
pub const COLUMNS: [&str; 10] = [
    "SR#",
    "Assigned to",
    "Department",
    "Computer System Model",
    "Serial Number",
    "CPU Model",
    "Memory (RAM)",
    "Monitor",
    "Monitor SN",
    "Storage",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Usually means a spreadsheet program still has the file open.
    #[error("{0} is locked or not writable; close any program using it and retry")]
    Locked(PathBuf),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write table: {0}")]
    Stream(#[source] io::Error),
    #[error("unknown export format {0:?} (expected csv, tsv or json)")]
    UnknownFormat(String),
}

impl ExportError {
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if is_locked(&source) {
            ExportError::Locked(path.to_path_buf())
        } else {
            ExportError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Windows reports a file held open by another program as a sharing or
/// lock violation rather than `PermissionDenied`.
#[cfg(windows)]
const LOCK_ERROR_CODES: &[i32] = &[32, 33];
#[cfg(not(windows))]
const LOCK_ERROR_CODES: &[i32] = &[];

fn is_locked(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
        || err
            .raw_os_error()
            .is_some_and(|code| LOCK_ERROR_CODES.contains(&code))
}

/// Supported table encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Tsv => write!(f, "tsv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

fn encode<W: Write>(w: W, format: ExportFormat, records: &[InventoryRecord]) -> io::Result<()> {
    match format {
        ExportFormat::Csv => delimited::write_records(w, records, ','),
        ExportFormat::Tsv => delimited::write_records(w, records, '\t'),
        ExportFormat::Json => json::write_records(w, records),
    }
}

/// Encode `records` into `w` and flush it. Used for stdout output.
pub fn write_table<W: Write>(
    mut w: W,
    format: ExportFormat,
    records: &[InventoryRecord],
) -> Result<(), ExportError> {
    encode(&mut w, format, records)
        .and_then(|_| w.flush())
        .map_err(ExportError::Stream)
}

/// Create (or truncate) `path` and write `records` to it.
pub fn write_file(
    path: &Path,
    format: ExportFormat,
    records: &[InventoryRecord],
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    encode(&mut out, format, records)
        .and_then(|_| out.flush())
        .map_err(|e| ExportError::from_io(path, e))?;

    tracing::info!(path = %path.display(), rows = records.len(), %format, "table written");
    Ok(())
}
