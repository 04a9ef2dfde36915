//! Output encoders: CSV and indented JSON.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;

use mailprep_model::{Field, Record};

/// Write records as CSV with canonical header names, in the given field
/// order. Date fields render as `M/D/YYYY` or empty.
pub fn write_csv<W: Write>(out: W, records: &[Record], fields: &[Field]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(fields.iter().map(|field| field.name()))
        .context("write csv header")?;
    for record in records {
        writer
            .write_record(fields.iter().map(|&field| record.text(field)))
            .context("write csv row")?;
    }
    writer.flush().context("flush csv output")?;
    Ok(())
}

/// Write records as an indented JSON array.
///
/// Without a subset the full record serializes through its published
/// field names. With a subset, only the selected fields are emitted, in
/// the given order.
pub fn write_json<W: Write>(
    mut out: W,
    records: &[Record],
    fields: Option<&[Field]>,
) -> Result<()> {
    match fields {
        None => {
            serde_json::to_writer_pretty(&mut out, records).context("encode json")?;
        }
        Some(fields) => {
            let objects: Vec<serde_json::Map<String, Value>> = records
                .iter()
                .map(|record| {
                    fields
                        .iter()
                        .map(|&field| (field.json_name().to_string(), json_value(record, field)))
                        .collect()
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &objects).context("encode json")?;
        }
    }
    writeln!(out).context("write json output")?;
    Ok(())
}

fn json_value(record: &Record, field: Field) -> Value {
    let text = record.text(field);
    if field.is_date() && text.is_empty() {
        // Absent dates are null, matching the full-record encoding.
        return Value::Null;
    }
    Value::String(text)
}
