//! Static report corpora used across harnesses.
//!
//! Each fixture is a trimmed-down HWiNFO HTML export with the sections the
//! extractors care about, paired with the record it must produce.

/// Desktop with every field present. Also carries a conflicting chassis
/// serial to exercise label priority.
pub const REPORT_OPTIPLEX: &str = r#"<HTML><HEAD><TITLE>HWiNFO64 Report</TITLE></HEAD><BODY>
<H2 id="Computer">Computer</H2>
<TABLE>
<TR><TD>Computer Brand Name:<TD>Dell Inc. OptiPlex</TD></TR>
<TR><TD>Computer Model:<TD>DELL OptiPlex 7040</TD></TR>
<TR><TD>Product Serial Number: ABC12345</TD></TR>
<TR><TD>Chassis Serial Number: CHS00001</TD></TR>
</TABLE>
<H2 id="Cpu">Central Processor</H2>
<TABLE>
<TR><TD>Processor Name: Intel(R) Core(TM) i5-6500 CPU @ 3.20GHz</TD></TR>
</TABLE>
<H2 id="Memory">Memory</H2>
<TABLE>
<TR><TD>Total Memory Size:<TD>8192 MBytes</TD></TR>
<TR><TD>Memory Type:<TD>DDR4 SDRAM</TD></TR>
</TABLE>
<H2 id="Monitor">Monitor</H2>
<TABLE>
<TR><TD>Monitor Name:<TD>HP E241i</TD></TR>
<TR><TD>Monitor Name (Manuf):<TD>HP E241i</TD></TR>
<TR><TD>Serial Number:<TD>CN44250K9T</TD></TR>
<TR><TD>Date Of Manufacture:<TD>Week: 25, Year: 2014</TD></TR>
</TABLE>
<H2 id="Drives">Drives</H2>
<TABLE>
<TR><TD>SSD Drive (Non-rotating)</TD></TR>
<TR><TD>Serial Number:<TD>S3Z9NB0K123456</TD></TR>
<TR><TD>Drive Capacity:<TD>256 GB (256060514304 Bytes)</TD></TR>
</TABLE>
</BODY></HTML>
"#;

/// Expected cells (model, serial, cpu, ram, monitor, monitor SN, storage).
pub const EXPECTED_OPTIPLEX: [&str; 7] = [
    "DELL OptiPlex 7040",
    "ABC12345",
    "Intel Core i5-6500",
    "8 GB DDR4",
    "HP E241i",
    "CN44250K9T",
    "SSD (256060514304 Bytes)",
];

/// Small-form-factor box: allow-listed model hidden inside a longer brand
/// string, chassis serial in a cell, NVMe, no monitor block, no DDR marker.
pub const REPORT_ELITE: &str = r#"<HTML><BODY>
<H2 id="Computer">Computer</H2>
<TABLE>
<TR><TD>Computer Brand Name:<TD>Hewlett-Packard HP Compaq Elite 8300 SFF</TD></TR>
<TR><TD>Chassis Serial Number:<TD>CZC3281XYZ</TD></TR>
<TR><TD>Processor Name:<TD>Intel(R) Core(TM) i7-3770 CPU @ 3.40GHz</TD></TR>
<TR><TD>Total Memory Size:<TD>16 GBytes</TD></TR>
</TABLE>
<H2 id="Drives">Drives</H2>
<TABLE>
<TR><TD>NVMe Drives</TD></TR>
<TR><TD>Drive Capacity:<TD class="v">512 GB (512110190592 Bytes)</TD></TR>
</TABLE>
</BODY></HTML>
"#;

pub const EXPECTED_ELITE: [&str; 7] = [
    "HP Compaq Elite 8300 SFF",
    "CZC3281XYZ",
    "Intel Core i7-3770",
    "16 GB",
    "Not found",
    "Not found",
    "NVMe (512110190592 Bytes)",
];

/// Machine the allow-list does not know, with only fallback-level data.
pub const REPORT_SPARSE: &str = r#"<HTML><BODY>
<H2 id="Computer">Computer</H2>
<TABLE>
<TR><TD>Computer Brand Name:<TD>LENOVO&nbsp;ThinkCentre   M720q</TD></TR>
<TR><TD>Mainboard Serial Number: L1HF98X01AB</TD></TR>
<TR><TD>CPU:<TD>Intel Core i3-8100T</TD></TR>
</TABLE>
<H2 id="Monitor">Monitor</H2>
<TABLE>
<TR><TD>Model:<TD>Lenovo L24e-20</TD></TR>
</TABLE>
<H2 id="Audio">Audio</H2>
</BODY></HTML>
"#;

pub const EXPECTED_SPARSE: [&str; 7] = [
    "LENOVO ThinkCentre M720q",
    "L1HF98X01AB",
    "Intel Core i3-8100T",
    "Not found",
    "Lenovo L24e-20",
    "Not found",
    "Not found",
];

/// Text that looks like HTML but carries none of the recognized fields.
pub const REPORT_EMPTY: &str = "<HTML><BODY><H2>Nothing to see</H2><P>lorem ipsum</P></BODY></HTML>";

/// Every fixture with its expected cells.
pub const CORPUS: &[(&str, &str, [&str; 7])] = &[
    ("optiplex", REPORT_OPTIPLEX, EXPECTED_OPTIPLEX),
    ("elite", REPORT_ELITE, EXPECTED_ELITE),
    ("sparse", REPORT_SPARSE, EXPECTED_SPARSE),
];

// ---------------------------------------------------------------------------
// On-disk report trees
// ---------------------------------------------------------------------------

/// Lay out `<root>/<department>/<file>` for each `(department, file, body)`.
pub fn write_tree(root: &std::path::Path, files: &[(&str, &str, &str)]) -> std::io::Result<()> {
    for (department, file, body) in files {
        let dir = root.join(department);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(file), body)?;
    }
    Ok(())
}
