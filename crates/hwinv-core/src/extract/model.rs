//! Computer system model.
//!
//! Known models are matched verbatim first because some vendors put a
//! marketing name in the labeled field that differs from the asset name.

use super::{capture, first_match, Extraction, Strategy};
use crate::normalizer::normalize;
use regex::Regex;
use std::sync::LazyLock;

/// Checked in this order; first substring hit wins.
pub const DEFAULT_KNOWN_MODELS: &[&str] = &[
    "DELL OptiPlex 7040",
    "DELL OptiPlex 3050",
    "DELL OptiPlex 7010",
    "HP Compaq Elite 8300 SFF",
];

static BRAND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Computer Brand Name:<TD[^>]*>([^<]+)").expect("brand name pattern")
});

const LABELED: &[Strategy] = &[brand_name_field];

fn brand_name_field(text: &str) -> Option<String> {
    capture(&BRAND_NAME, text).map(|v| normalize(&v))
}

/// Extract the model using [`DEFAULT_KNOWN_MODELS`] as the allow-list.
pub fn computer_model(text: &str) -> Extraction {
    computer_model_with(text, DEFAULT_KNOWN_MODELS)
}

/// Extract the model, trying `known` (in order) before the labeled field.
pub fn computer_model_with<S: AsRef<str>>(text: &str, known: &[S]) -> Extraction {
    let listed = known
        .iter()
        .map(|m| m.as_ref())
        .find(|model| !model.is_empty() && text.contains(*model));
    match listed {
        Some(model) => Extraction::found(model),
        None => first_match(text, LABELED),
    }
}
