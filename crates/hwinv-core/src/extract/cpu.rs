//! Processor model.

use super::{capture, first_match, Extraction, Strategy};
use crate::normalizer::normalize;
use regex::Regex;
use std::sync::LazyLock;

static PROCESSOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Processor\s+Name:\s*(?:<TD[^>]*>\s*)?([^<]+?)(?:\s*</TD>|CPU\s*@|\s*$)")
        .expect("processor name pattern")
});

static CLOCK_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*@\s*\d+\.\d+GHz.*").expect("clock suffix pattern"));

static TRADEMARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(R\)|\s*\(TM\)").expect("trademark pattern"));

static CORE_MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Intel\s+Core\s+i[3579]-\d{4,5}[A-Z]?)").expect("core model pattern")
});

const STRATEGIES: &[Strategy] = &[processor_name_field, core_model_anywhere];

fn processor_name_field(text: &str) -> Option<String> {
    let raw = capture(&PROCESSOR_NAME, text)?;
    let without_clock = CLOCK_SUFFIX.replace(&raw, "");
    let without_marks = TRADEMARKS.replace_all(&without_clock, "");
    Some(normalize(&without_marks))
}

fn core_model_anywhere(text: &str) -> Option<String> {
    capture(&CORE_MODEL, text).map(|v| normalize(&v))
}

pub fn cpu_model(text: &str) -> Extraction {
    first_match(text, STRATEGIES)
}
