//! Directory-tree report source.

use crate::{read_report, ReportSource, SourceError};
use hwinv_core::RawReport;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` recursively and yields every file whose extension is in
/// `extensions` (case-insensitive, no leading dot).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    fn wanted(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|w| e.eq_ignore_ascii_case(w)))
    }
}

impl ReportSource for DirectorySource {
    fn discover(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.root.is_dir() {
            return Err(SourceError::RootNotFound(self.root.clone()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && self.wanted(entry.path()) {
                found.push(entry.into_path());
            }
        }

        tracing::info!(root = %self.root.display(), count = found.len(), "reports discovered");
        Ok(found)
    }

    fn load(&self, path: &Path) -> Result<RawReport, SourceError> {
        read_report(path)
    }
}
