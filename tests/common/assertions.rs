//! Domain-specific assertion macros for hwinv harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! field of which record broke.

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert the seven extracted cells of a record, in column order.
///
/// ```rust
/// assert_extracted!(record, ["DELL OptiPlex 7040", "ABC12345", /* … */]);
/// ```
#[macro_export]
macro_rules! assert_extracted {
    ($record:expr, $expected:expr) => {{
        let record: &hwinv_core::InventoryRecord = &$record;
        let expected: [&str; 7] = $expected;
        let actual: Vec<&str> = record.cells()[2..].to_vec();
        pretty_assertions::assert_eq!(
            actual,
            expected.to_vec(),
            "extracted cells differ for assignee {:?}",
            record.assignee
        );
    }};
}

/// Assert that no cell of a record is blank. Misses must render as the
/// sentinel, never as an empty string.
#[macro_export]
macro_rules! assert_no_blank_cells {
    ($record:expr) => {{
        let record: &hwinv_core::InventoryRecord = &$record;
        for (i, cell) in record.cells()[2..].iter().enumerate() {
            if cell.is_empty() {
                panic!(
                    "assert_no_blank_cells! failed: extracted cell {} is empty in {:?}",
                    i, record
                );
            }
        }
    }};
}
