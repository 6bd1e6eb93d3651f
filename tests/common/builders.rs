//! Test builders: compose HWiNFO-shaped HTML reports row by row.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for report HTML.
///
/// # Example
///
/// ```rust
/// let html = ReportBuilder::new()
///     .section("Computer")
///     .cell("Computer Brand Name", "HP ProDesk 600 G3")
///     .section("Monitor")
///     .cell("Monitor Name", "LG 24MK430")
///     .build();
/// ```
#[derive(Default)]
pub struct ReportBuilder {
    body: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new `<H2 id="...">` section.
    pub fn section(mut self, id: &str) -> Self {
        self.body
            .push_str(&format!("<H2 id=\"{id}\">{id}</H2>\n"));
        self
    }

    /// `Label:<TD>value` row, the layout HWiNFO uses for most fields.
    pub fn cell(mut self, label: &str, value: &str) -> Self {
        self.body
            .push_str(&format!("<TR><TD>{label}:<TD>{value}</TD></TR>\n"));
        self
    }

    /// `Label: value` row, as written by older exporters.
    pub fn inline(mut self, label: &str, value: &str) -> Self {
        self.body
            .push_str(&format!("<TR><TD>{label}: {value}</TD></TR>\n"));
        self
    }

    /// Arbitrary raw markup.
    pub fn raw(mut self, html: &str) -> Self {
        self.body.push_str(html);
        self.body.push('\n');
        self
    }

    pub fn build(self) -> String {
        format!("<HTML><BODY>\n{}</BODY></HTML>\n", self.body)
    }
}
