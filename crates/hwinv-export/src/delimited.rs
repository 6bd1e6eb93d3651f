//! CSV / TSV encoding. Always writes a header row.

use hwinv_core::InventoryRecord;
use std::io::{self, Write};

use crate::COLUMNS;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row, quoting cells that contain the separator, quotes or
/// line breaks.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

/// Header plus one `SR#`-numbered row per record.
pub fn write_records<W: Write>(mut w: W, records: &[InventoryRecord], sep: char) -> io::Result<()> {
    write_row(&mut w, &COLUMNS, sep)?;
    for (i, record) in records.iter().enumerate() {
        let sr = (i + 1).to_string();
        let mut row = Vec::with_capacity(COLUMNS.len());
        row.push(sr.as_str());
        row.extend(record.cells());
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}
