//! JSON encoding: one document with a generation timestamp and the rows,
//! keyed by column name.

use chrono::{DateTime, Utc};
use hwinv_core::InventoryRecord;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "SR#")]
    sr: usize,
    #[serde(flatten)]
    record: &'a InventoryRecord,
}

#[derive(Serialize)]
struct Document<'a> {
    generated_at: DateTime<Utc>,
    records: Vec<Row<'a>>,
}

pub fn write_records<W: Write>(mut w: W, records: &[InventoryRecord]) -> io::Result<()> {
    let doc = Document {
        generated_at: Utc::now(),
        records: records
            .iter()
            .enumerate()
            .map(|(i, record)| Row { sr: i + 1, record })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut w, &doc)?;
    writeln!(w)
}
