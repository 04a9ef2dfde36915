//! CSV ingestion.
//!
//! Reads the whole input into memory as a header row plus body rows.
//! Cells are trimmed (including a UTF-8 BOM on the first cell) and rows
//! that are entirely empty are dropped. Rows keep their raw widths; short
//! rows are the record builder's concern, not the reader's.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use mailprep_model::{PrepError, Result};

/// The raw table read from one CSV input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRows {
    /// The first non-empty row.
    pub header: Vec<String>,
    /// Every following non-empty row, in input order.
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read all rows from a CSV byte stream.
///
/// Fails with [`PrepError::EmptyInput`] when the input holds no rows at
/// all, and [`PrepError::Read`] when the underlying reader or the CSV
/// framing fails.
pub fn read_rows<R: Read>(input: R) -> Result<CsvRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| PrepError::Read(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(PrepError::EmptyInput);
    }

    let mut rows = raw_rows.into_iter();
    let header = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();
    debug!(columns = header.len(), rows = rows.len(), "csv read");
    Ok(CsvRows { header, rows })
}

/// Read all rows from a CSV file on disk.
pub fn read_rows_from_path(path: &Path) -> Result<CsvRows> {
    let file = File::open(path)
        .map_err(|error| PrepError::Read(format!("{}: {error}", path.display())))?;
    read_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_body() {
        let input = "First Name,Last Name\nBuck,Ulmer\nAdam,Savage\n";
        let table = read_rows(input.as_bytes()).expect("read");
        assert_eq!(table.header, vec!["First Name", "Last Name"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Buck", "Ulmer"]);
    }

    #[test]
    fn trims_cells_and_bom() {
        let input = "\u{feff}Zip, City \n\"  76016 \",\" Arlington\"\n";
        let table = read_rows(input.as_bytes()).expect("read");
        assert_eq!(table.header, vec!["Zip", "City"]);
        assert_eq!(table.rows[0], vec!["76016", "Arlington"]);
    }

    #[test]
    fn skips_fully_empty_rows() {
        let input = "Zip\n\n76016\n,\n";
        let table = read_rows(input.as_bytes()).expect("read");
        assert_eq!(table.rows, vec![vec!["76016".to_string()]]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(read_rows(&b""[..]).unwrap_err(), PrepError::EmptyInput);
        assert_eq!(read_rows(&b"\n\n"[..]).unwrap_err(), PrepError::EmptyInput);
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let table = read_rows(&b"Zip,City\n"[..]).expect("read");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn keeps_short_rows_short() {
        let input = "A,B,C\n1,2\n";
        let table = read_rows(input.as_bytes()).expect("read");
        assert_eq!(table.rows[0].len(), 2);
    }
}
