//! Section locator: bounds a search to one named block of a report.
//!
//! Labels such as `Serial Number` recur in several unrelated blocks of the
//! same report, so field patterns that belong to one block run against the
//! slice returned here instead of the whole document.

/// Return the slice of `text` from the first `marker` up to (not including)
/// the earliest following occurrence of any `boundaries` name.
///
/// The marker match is case-sensitive; boundary names match ASCII
/// case-insensitively and are searched from the marker position itself. With
/// no boundary in sight the section runs to the end of `text`. `None` when
/// the marker is absent.
pub fn locate_section<'a>(text: &'a str, marker: &str, boundaries: &[&str]) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }
    let start = text.find(marker)?;
    let tail = &text[start..];

    // ASCII lowering keeps byte offsets aligned with `tail`.
    let lowered = tail.to_ascii_lowercase();
    let end = boundaries
        .iter()
        .filter(|b| !b.is_empty())
        .filter_map(|b| lowered.find(&b.to_ascii_lowercase()))
        .min()
        .unwrap_or(tail.len());

    Some(&tail[..end])
}
