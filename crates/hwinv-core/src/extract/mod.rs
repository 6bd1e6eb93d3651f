//! Field extractors: one ordered strategy cascade per inventory field.
//!
//! Every extractor has the same shape: a slice of [`Strategy`] functions
//! tried in priority order. The first one that yields a non-empty value wins;
//! when none does, the field is [`Extraction::NotFound`]. Extractors never
//! fail and never look at each other's output.
//!
//! Parsing is attempted in order: allow-lists → labeled fields → bare
//! heuristics → not found.

use crate::types::NOT_FOUND;
use std::fmt;

pub mod cpu;
pub mod model;
pub mod monitor;
pub mod ram;
pub mod serial;
pub mod storage;

pub use cpu::cpu_model;
pub use model::{computer_model, computer_model_with, DEFAULT_KNOWN_MODELS};
pub use monitor::{monitor, Monitor};
pub use ram::ram;
pub use serial::serial_number;
pub use storage::storage;

/// A single extraction attempt against raw report text.
pub type Strategy = fn(&str) -> Option<String>;

/// Outcome of one field extractor.
///
/// Absent and ambiguous are the same thing here: both are `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound,
}

impl Extraction {
    pub fn found(value: impl Into<String>) -> Self {
        Extraction::Found(value.into())
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Extraction::Found(v) => Some(v),
            Extraction::NotFound => None,
        }
    }

    /// The value, or [`NOT_FOUND`] for a miss.
    pub fn into_value(self) -> String {
        match self {
            Extraction::Found(v) => v,
            Extraction::NotFound => NOT_FOUND.to_string(),
        }
    }
}

/// Empty strings are misses; a field is never rendered blank.
impl From<Option<String>> for Extraction {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Extraction::Found(v),
            _ => Extraction::NotFound,
        }
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or(NOT_FOUND))
    }
}

/// Run `strategies` in order against `text`; first non-empty hit wins.
pub fn first_match(text: &str, strategies: &[Strategy]) -> Extraction {
    strategies
        .iter()
        .enumerate()
        .find_map(|(i, strategy)| {
            strategy(text).filter(|v| !v.is_empty()).inspect(|v| {
                tracing::debug!(strategy = i, value = %v, "strategy matched");
            })
        })
        .into()
}

/// Shorthand for the common "regex with one capture group" strategy body.
pub(crate) fn capture(re: &regex::Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}
