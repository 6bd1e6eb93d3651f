//! Record assembly: runs every extractor once over a report and folds the
//! results, together with the externally derived identity, into one
//! [`InventoryRecord`].

use crate::extract::{self, DEFAULT_KNOWN_MODELS};
use crate::types::{InventoryRecord, RawReport, ReportIdentity};

/// Assembler carrying the configured model allow-list.
///
/// Cheap to clone and `Send + Sync`, so one instance can be shared by every
/// worker in a batch.
#[derive(Debug, Clone)]
pub struct Assembler {
    known_models: Vec<String>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_MODELS.iter().map(|m| m.to_string()))
    }
}

impl Assembler {
    pub fn new(known_models: impl IntoIterator<Item = String>) -> Self {
        Self {
            known_models: known_models.into_iter().collect(),
        }
    }

    pub fn known_models(&self) -> &[String] {
        &self.known_models
    }

    pub fn assemble(&self, report: &RawReport, identity: &ReportIdentity) -> InventoryRecord {
        let text = report.text();
        let monitor = extract::monitor(text);

        let record = InventoryRecord {
            assignee: identity.assignee.clone(),
            department: identity.department.clone(),
            computer_model: extract::computer_model_with(text, &self.known_models).into_value(),
            serial_number: extract::serial_number(text).into_value(),
            cpu_model: extract::cpu_model(text).into_value(),
            ram: extract::ram(text).into_value(),
            monitor_name: monitor.name.into_value(),
            monitor_serial: monitor.serial.into_value(),
            storage: extract::storage(text).into_value(),
        };

        tracing::debug!(
            path = %report.path().display(),
            missing = record.missing_fields(),
            "record assembled"
        );
        record
    }
}

/// Assemble with the default allow-list.
pub fn assemble(report: &RawReport, identity: &ReportIdentity) -> InventoryRecord {
    Assembler::default().assemble(report, identity)
}
