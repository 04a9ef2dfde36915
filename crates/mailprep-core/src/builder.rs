//! Per-row record construction.

use mailprep_map::HeaderMap;
use mailprep_model::{Field, FormatRule, PrepError, Record, Result};
use mailprep_transform::{
    format_phone, lower_case, parse_date, split_full_name, split_zip, strip_separators,
    title_case, upper_case,
};

/// Build one [`Record`] from a data row.
///
/// Direct fields are extracted and formatted first via the dispatch table,
/// then the derived passes run in fixed order: name splitting, then zip
/// splitting. `row_number` is the 1-based position of the row in the body,
/// used only for error reporting.
pub fn build_record(map: &HeaderMap, row: &[String], row_number: usize) -> Result<Record> {
    let needed = map.min_row_width();
    if row.len() < needed {
        return Err(PrepError::MalformedRow {
            row: row_number,
            expected: needed,
            actual: row.len(),
        });
    }

    let mut record = Record::default();
    for (field, index) in map.iter() {
        apply_field(&mut record, field, &row[index]);
    }
    derive_name(&mut record);
    derive_zip(&mut record);
    Ok(record)
}

/// Format a raw cell per the field's rule and assign it.
fn apply_field(record: &mut Record, field: Field, raw: &str) {
    match field.format_rule() {
        FormatRule::TitleCase => record.set_text(field, title_case(raw)),
        FormatRule::Upper => record.set_text(field, upper_case(raw)),
        FormatRule::Lower => record.set_text(field, lower_case(raw)),
        FormatRule::Phone => record.set_text(field, format_phone(raw)),
        FormatRule::StripSeparators => record.set_text(field, strip_separators(raw)),
        FormatRule::Passthrough => record.set_text(field, raw.to_string()),
        FormatRule::Date => record.set_date(field, parse_date(raw)),
    }
}

/// Split `fullname` into name components when the structured fields are
/// incomplete. Direct values win when both firstname and lastname are
/// already populated.
fn derive_name(record: &mut Record) {
    if record.fullname.is_empty() {
        return;
    }
    if !record.firstname.is_empty() && !record.lastname.is_empty() {
        return;
    }
    let parts = split_full_name(&record.fullname);
    record.firstname = title_case(&parts.first);
    record.middle_initial = upper_case(&parts.middle);
    record.lastname = title_case(&parts.last);
}

/// Split a compound zip into base and +4. A derived empty extension never
/// overwrites an explicitly mapped zip4 value.
fn derive_zip(record: &mut Record) {
    if record.zip.is_empty() {
        return;
    }
    let (base, plus4) = split_zip(&record.zip);
    record.zip = base;
    if !plus4.is_empty() {
        record.zip4 = plus4;
    }
}
