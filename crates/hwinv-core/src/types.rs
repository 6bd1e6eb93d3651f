//! Core types shared across the workspace: the input [`RawReport`], the
//! identity metadata that travels with it, and the output [`InventoryRecord`].

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Rendered value of a field no strategy could extract.
pub const NOT_FOUND: &str = "Not found";

/// The unparsed text of one report plus the path it was read from.
///
/// Extraction only ever borrows the text; a report is dropped once its
/// record has been assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport {
    path: PathBuf,
    text: String,
}

impl RawReport {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Who the machine belongs to. Derived outside the core (from the report's
/// file name and parent directory); the assembler copies it through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportIdentity {
    pub assignee: String,
    pub department: String,
}

impl ReportIdentity {
    pub fn new(assignee: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
            department: department.into(),
        }
    }
}

/// One output row.
///
/// Every extracted field holds either a real value or [`NOT_FOUND`], so a
/// table built from these never has holes. Serialized keys match the export
/// column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRecord {
    #[serde(rename = "Assigned to")]
    pub assignee: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Computer System Model")]
    pub computer_model: String,
    #[serde(rename = "Serial Number")]
    pub serial_number: String,
    #[serde(rename = "CPU Model")]
    pub cpu_model: String,
    #[serde(rename = "Memory (RAM)")]
    pub ram: String,
    #[serde(rename = "Monitor")]
    pub monitor_name: String,
    #[serde(rename = "Monitor SN")]
    pub monitor_serial: String,
    #[serde(rename = "Storage")]
    pub storage: String,
}

impl InventoryRecord {
    /// Cell values in export column order, without the leading `SR#`.
    pub fn cells(&self) -> [&str; 9] {
        [
            self.assignee.as_str(),
            self.department.as_str(),
            self.computer_model.as_str(),
            self.serial_number.as_str(),
            self.cpu_model.as_str(),
            self.ram.as_str(),
            self.monitor_name.as_str(),
            self.monitor_serial.as_str(),
            self.storage.as_str(),
        ]
    }

    /// Number of extracted fields that fell back to [`NOT_FOUND`].
    pub fn missing_fields(&self) -> usize {
        self.cells()[2..].iter().filter(|v| **v == NOT_FOUND).count()
    }
}
