//! Installed memory: total size plus the memory generation, when the report
//! mentions one anywhere.

use super::{first_match, Extraction, Strategy};
use regex::Regex;
use std::sync::LazyLock;

static TOTAL_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Total Memory Size:<TD>(\d+\.?\d*)\s*(GBytes|GB|MB|MBytes)")
        .expect("total memory pattern")
});

/// Checked in this order against the upper-cased report.
const GENERATIONS: &[&str] = &["DDR5", "DDR3", "DDR4"];

const STRATEGIES: &[Strategy] = &[total_memory_size];

fn total_memory_size(text: &str) -> Option<String> {
    let caps = TOTAL_SIZE.captures(text)?;
    let size = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();

    let size = if unit.to_ascii_lowercase().starts_with("mb") {
        megabytes_as_gigabytes(size)?
    } else {
        size.to_string()
    };

    let mut out = format!("{size} GB");
    if let Some(generation) = generation(text) {
        out.push(' ');
        out.push_str(generation);
    }
    Some(out)
}

/// `8192` → `8`, `6000` → `5.9`.
fn megabytes_as_gigabytes(size: &str) -> Option<String> {
    let gb = size.parse::<f64>().ok()? / 1024.0;
    if gb.fract() == 0.0 {
        Some(format!("{gb:.0}"))
    } else {
        Some(format!("{gb:.1}"))
    }
}

fn generation(text: &str) -> Option<&'static str> {
    let upper = text.to_ascii_uppercase();
    GENERATIONS.iter().copied().find(|g| upper.contains(g))
}

pub fn ram(text: &str) -> Extraction {
    first_match(text, STRATEGIES)
}
