use std::io::Write;

use mailprep_ingest::read_rows_from_path;
use mailprep_model::PrepError;

#[test]
fn reads_a_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "First Name,Last Name").expect("write");
    writeln!(file, "Buck,Ulmer").expect("write");
    let table = read_rows_from_path(file.path()).expect("read");
    assert_eq!(table.header, vec!["First Name", "Last Name"]);
    assert_eq!(table.rows, vec![vec!["Buck".to_string(), "Ulmer".to_string()]]);
}

#[test]
fn missing_file_reports_the_path() {
    let error = read_rows_from_path(std::path::Path::new("/no/such/file.csv")).unwrap_err();
    match error {
        PrepError::Read(message) => assert!(message.contains("/no/such/file.csv")),
        other => panic!("expected read error, got {other:?}"),
    }
}
