//! Monitor name and serial, scoped to the report's monitor block.
//!
//! `Serial Number` appears under drives, the mainboard and the monitor alike,
//! so nothing here ever looks outside the block returned by
//! [`locate_section`]. A report without a monitor block yields a pair of
//! misses without any pattern being tried.

use super::{capture, first_match, Extraction, Strategy};
use crate::normalizer::normalize;
use crate::section::locate_section;
use regex::Regex;
use std::sync::LazyLock;

pub const SECTION_MARKER: &str = r#"id="Monitor""#;

/// Names of the blocks that can follow the monitor block.
pub const SECTION_BOUNDARIES: &[&str] = &[
    "Drives",
    "Audio",
    "Network",
    "Ports",
    "Bus",
    "Video",
    "CPU",
    "Motherboard",
];

static NAME_TERMINATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Monitor\s+Name(?:\s*\(Manuf\))?:<TD[^>]*>([^<\n\r]+?)(?:\s*</TD>|\s*$)")
        .expect("terminated monitor name pattern")
});

// Same label as above without the terminator, so `<BR>`-ended cells still hit.
static NAME_MANUF_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Monitor\s+Name\s*\(Manuf\):<TD[^>]*>([^<\n\r]+)")
        .expect("open monitor name pattern")
});

static VENDOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(?:Hewlett-Packard|HP|Lenovo|Dell|Acer|LG|Samsung)[^\n\r<]+")
        .expect("vendor line pattern")
});

static SERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Serial\s+Number(?:\s*\(Manuf\))?:<TD[^>]*>([A-Za-z0-9]+)")
        .expect("monitor serial pattern")
});

const NAME_STRATEGIES: &[Strategy] = &[name_terminated, name_manuf_open, vendor_line];

const SERIAL_STRATEGIES: &[Strategy] = &[serial_field];

fn name_terminated(section: &str) -> Option<String> {
    capture(&NAME_TERMINATED, section).map(|v| normalize(&v))
}

fn name_manuf_open(section: &str) -> Option<String> {
    capture(&NAME_MANUF_OPEN, section).map(|v| normalize(&v))
}

fn vendor_line(section: &str) -> Option<String> {
    VENDOR_LINE.find(section).map(|m| normalize(m.as_str()))
}

fn serial_field(section: &str) -> Option<String> {
    capture(&SERIAL, section)
}

/// Name and serial of the attached monitor; each half misses independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub name: Extraction,
    pub serial: Extraction,
}

impl Monitor {
    pub fn not_found() -> Self {
        Self {
            name: Extraction::NotFound,
            serial: Extraction::NotFound,
        }
    }
}

pub fn monitor(text: &str) -> Monitor {
    let Some(section) = locate_section(text, SECTION_MARKER, SECTION_BOUNDARIES) else {
        return Monitor::not_found();
    };
    Monitor {
        name: first_match(section, NAME_STRATEGIES),
        serial: first_match(section, SERIAL_STRATEGIES),
    }
}
