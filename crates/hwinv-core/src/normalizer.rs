//! Normalizer: turns a matched HTML fragment into canonical display text.
//!
//! Non-breaking spaces (raw and entity-encoded) become ordinary spaces, every
//! whitespace run collapses to a single space, and both ends are trimmed.
//! Extractors call this on the substrings they return; the full document is
//! never normalized because positional patterns depend on its raw layout.

/// Entity spellings of U+00A0 seen in report exports.
const NBSP_ENTITIES: &[&str] = &["&nbsp;", "&#160;", "&#xA0;", "&#xa0;"];

/// Canonicalize whitespace in `text`. Total: any input yields a value.
pub fn normalize(text: &str) -> String {
    let mut decoded = text.replace(['\u{a0}', '\u{202f}'], " ");
    for entity in NBSP_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, " ");
        }
    }
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
