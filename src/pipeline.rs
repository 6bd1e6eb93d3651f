//! Batch pipeline: discover, then load + assemble every report concurrently.
//!
//! Tasks are spawned up front and joined in discovery order, so the row
//! order never depends on which report finished first.

use hwinv_core::{Assembler, InventoryRecord};
use hwinv_sources::{identity_for, ReportSource, SourceError};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One report that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a batch that produced at least one record.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// In discovery order.
    pub records: Vec<InventoryRecord>,
    pub failures: Vec<ReportFailure>,
    pub discovered: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("no valid data extracted from any of {discovered} report file(s)")]
    NoRecords {
        discovered: usize,
        failures: Vec<ReportFailure>,
    },
}

/// Run one batch over everything `source` discovers.
pub async fn run_batch(
    source: Arc<dyn ReportSource>,
    assembler: Arc<Assembler>,
) -> Result<BatchOutcome, PipelineError> {
    let paths = source.discover()?;
    let total = paths.len();
    tracing::info!(total, "found {total} report file(s)");

    let handles: Vec<_> = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let source = Arc::clone(&source);
            let assembler = Arc::clone(&assembler);
            let task_path = path.clone();
            let handle = tokio::task::spawn_blocking(move || {
                tracing::info!(
                    "[{:>3}/{:>3}] Processing: {}",
                    index + 1,
                    total,
                    display_name(&task_path)
                );
                process_one(source.as_ref(), &assembler, &task_path)
            });
            (path, handle)
        })
        .collect();

    let mut outcome = BatchOutcome {
        discovered: total,
        ..BatchOutcome::default()
    };
    for (path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(err) => Err(format!("worker task failed: {err}")),
        };
        match result {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "report skipped");
                outcome.failures.push(ReportFailure { path, reason });
            }
        }
    }

    tracing::info!(
        records = outcome.records.len(),
        failures = outcome.failures.len(),
        "batch complete"
    );

    if outcome.records.is_empty() {
        return Err(PipelineError::NoRecords {
            discovered: total,
            failures: outcome.failures,
        });
    }
    Ok(outcome)
}

fn process_one(
    source: &dyn ReportSource,
    assembler: &Assembler,
    path: &Path,
) -> Result<InventoryRecord, String> {
    let report = source.load(path).map_err(|e| e.to_string())?;
    let identity = identity_for(report.path());
    panic::catch_unwind(AssertUnwindSafe(|| assembler.assemble(&report, &identity)))
        .map_err(|payload| match payload.downcast_ref::<&str>() {
            Some(msg) => format!("extraction panicked: {msg}"),
            None => match payload.downcast_ref::<String>() {
                Some(msg) => format!("extraction panicked: {msg}"),
                None => "extraction panicked".to_string(),
            },
        })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
