//! hwinv — hardware inventory from HWiNFO HTML reports.
//!
//! Walks a directory of per-machine reports, extracts the inventory fields
//! from each one and writes a single table. This crate owns the batch
//! pipeline; the layers it drives live in the workspace crates so that
//! integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! hwinv-sources ──► hwinv-core ──► hwinv-export
//!  discover/load     assemble       csv / tsv / json
//!        └──────── pipeline (this crate) ────────┘
//! ```
//!
//! Every report is processed on its own blocking task. A report that cannot
//! be read, or whose extraction panics, is logged and skipped; the rest of
//! the batch is unaffected.

pub mod pipeline;

pub use pipeline::{run_batch, BatchOutcome, PipelineError, ReportFailure};
