//! Machine serial number.
//!
//! Labeled fields are tried from most to least specific (product, then
//! system/chassis, then mainboard). As a last resort a bare service-tag
//! shaped token is taken from anywhere in the report.

use super::{capture, first_match, Extraction, Strategy};
use regex::Regex;
use std::sync::LazyLock;

/// Label separator: plain whitespace, or a table cell opener.
macro_rules! labeled_serial {
    ($label:literal) => {
        concat!(
            r"(?i)",
            $label,
            r":\s*(?:<TD[^>]*>\s*)?([A-Za-z0-9\-_]+)"
        )
    };
}

static PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(labeled_serial!(r"Product\s+Serial\s+Number")).expect("product serial pattern")
});

static SYSTEM_OR_CHASSIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(labeled_serial!(
        r"(?:System\s+Serial\s+Number|Chassis\s+Serial\s+Number)"
    ))
    .expect("system serial pattern")
});

static MAINBOARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(labeled_serial!(r"Mainboard\s+Serial\s+Number"))
        .expect("mainboard serial pattern")
});

// Case-sensitive: service tags are printed in upper case.
static BARE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{3}[0-9]{5}[A-Z0-9]{0,2})").expect("bare tag pattern"));

const STRATEGIES: &[Strategy] = &[product, system_or_chassis, mainboard, bare_tag];

fn product(text: &str) -> Option<String> {
    capture(&PRODUCT, text)
}

fn system_or_chassis(text: &str) -> Option<String> {
    capture(&SYSTEM_OR_CHASSIS, text)
}

fn mainboard(text: &str) -> Option<String> {
    capture(&MAINBOARD, text)
}

fn bare_tag(text: &str) -> Option<String> {
    capture(&BARE_TAG, text)
}

pub fn serial_number(text: &str) -> Extraction {
    first_match(text, STRATEGIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::product("Product Serial Number: ABC12345", "ABC12345")]
    #[case::product_cell("Product Serial Number:<TD class=x>5CG7-21_X</TD>", "5CG7-21_X")]
    #[case::lowercase_label("product serial number:  h7k2m", "h7k2m")]
    #[case::system("System Serial Number: SYS-001", "SYS-001")]
    #[case::chassis("Chassis   Serial Number: CH999", "CH999")]
    #[case::mainboard("Mainboard Serial Number: /MB/ x", "Not found")]
    #[case::mainboard_plain("Mainboard Serial Number: MB777", "MB777")]
    fn labeled_fields(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(serial_number(text).to_string(), expected);
    }

    #[test]
    fn product_beats_chassis() {
        let text = "Chassis Serial Number: CHASSIS1\nProduct Serial Number: PROD1";
        assert_eq!(serial_number(text), Extraction::found("PROD1"));
    }

    #[test]
    fn chassis_beats_mainboard() {
        let text = "Mainboard Serial Number: MB1\nChassis Serial Number: CH1";
        assert_eq!(serial_number(text), Extraction::found("CH1"));
    }

    #[test]
    fn bare_tag_fallback() {
        assert_eq!(serial_number("asset CZC12345X9 end"), Extraction::found("CZC12345X9"));
        assert_eq!(serial_number("tag MXL4321"), Extraction::NotFound);
    }

    #[test]
    fn bare_tag_is_case_sensitive() {
        assert_eq!(serial_number("czc12345"), Extraction::NotFound);
    }

    #[test]
    fn labeled_beats_bare_tag() {
        let text = "CZC99999 Mainboard Serial Number: MB1";
        assert_eq!(serial_number(text), Extraction::found("MB1"));
    }
}
