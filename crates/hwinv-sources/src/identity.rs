//! Identity derivation from a report's location.
//!
//! Reports are filed as `<Department>/<First>_<Last>.htm`, so the assignee
//! comes from the file stem and the department from the parent directory.

use hwinv_core::ReportIdentity;
use std::path::Path;

pub fn identity_for(path: &Path) -> ReportIdentity {
    let assignee = path
        .file_stem()
        .map(|s| s.to_string_lossy().replace('_', " ").trim().to_string())
        .unwrap_or_default();
    let department = path
        .parent()
        .and_then(Path::file_name)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    ReportIdentity::new(assignee, department)
}
