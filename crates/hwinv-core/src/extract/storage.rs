//! Primary storage: drive type and the byte-normalized capacity.

use super::{capture, first_match, Extraction, Strategy};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DRIVE_CAPACITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Drive Capacity:<TD[^>]*>([^<]+)").expect("drive capacity pattern")
});

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("parenthesized pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    Nvme,
    Ssd,
    Hdd,
}

impl DriveKind {
    /// NVMe, then non-rotating SSD; anything else is assumed spinning.
    pub fn detect(text: &str) -> Self {
        if text.contains("NVMe Drives") {
            DriveKind::Nvme
        } else if text.contains("SSD Drive (Non-rotating)") {
            DriveKind::Ssd
        } else {
            DriveKind::Hdd
        }
    }
}

impl fmt::Display for DriveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveKind::Nvme => write!(f, "NVMe"),
            DriveKind::Ssd => write!(f, "SSD"),
            DriveKind::Hdd => write!(f, "HDD"),
        }
    }
}

const STRATEGIES: &[Strategy] = &[typed_capacity];

// A type on its own is never reported.
fn typed_capacity(text: &str) -> Option<String> {
    let field = capture(&DRIVE_CAPACITY, text)?;
    let capacity = capture(&PARENTHESIZED, &field)?;
    Some(format!("{} ({})", DriveKind::detect(text), capacity))
}

pub fn storage(text: &str) -> Extraction {
    first_match(text, STRATEGIES)
}
