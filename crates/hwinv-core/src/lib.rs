//! hwinv-core — field extraction for HWiNFO hardware reports.
//!
//! This crate is pure: it never touches the filesystem except through
//! [`config::Config::load`]. Everything else takes report text in and hands
//! structured values back.
//!
//! # Architecture
//!
//! ```text
//! RawReport ──► extract::* (one cascade per field) ──► assemble ──► InventoryRecord
//!                   │
//!                   ├──► normalizer (applied to returned substrings)
//!                   └──► section    (monitor block scoping)
//! ```
//!
//! Extractors are independent of each other and hold no state, so reports can
//! be processed on as many threads as the caller likes.

pub mod assemble;
pub mod config;
pub mod extract;
pub mod normalizer;
pub mod section;
pub mod types;

pub use assemble::{assemble, Assembler};
pub use extract::Extraction;
pub use types::{InventoryRecord, RawReport, ReportIdentity, NOT_FOUND};
