//! Spreadsheet loading tests against small generated `.xlsx` workbooks.

mod common;

use common::{empty, num, text};
use realty_insights::loader::{load_bytes, load_path};
use realty_insights::{normalize_bytes, normalize_path, CellValue, Field, RealtyError};

#[test]
fn load_bytes_reads_header_and_rows() {
    let table = load_bytes(&common::sample_xlsx()).unwrap();
    let headers: Vec<&str> = table.headers.iter().map(|h| h.trim()).collect();
    let sample = common::sample_headers();
    let expected: Vec<&str> = sample.iter().map(|h| h.trim()).collect();
    assert_eq!(headers, expected);
    assert_eq!(table.rows.len(), common::sample_rows().len());
    assert_eq!(table.rows[0][1], CellValue::Text("Wakad".into()));
    assert_eq!(table.rows[0][2].as_f64(), Some(5_000_000.0));
}

#[test]
fn load_path_reads_first_sheet() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_xlsx(
        tmp.path(),
        "prices.xlsx",
        &["Year", "Area"],
        &[vec![num(2020.0), text("Baner")]],
    );
    let table = load_path(&path).unwrap();
    assert_eq!(table.headers, vec!["Year", "Area"]);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn normalize_bytes_builds_dataset() {
    let ds = normalize_bytes(&common::sample_xlsx()).unwrap();
    assert_eq!(ds, common::sample_dataset());
    assert!(ds.has_field(Field::Size));
    assert_eq!(ds.records()[0].year, Some(2020));
}

#[test]
fn normalize_path_matches_normalize_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_xlsx(
        tmp.path(),
        "sample.xlsx",
        &common::sample_headers(),
        &common::sample_rows(),
    );
    assert_eq!(
        normalize_path(&path).unwrap(),
        normalize_bytes(&common::sample_xlsx()).unwrap()
    );
}

#[test]
fn header_only_sheet_gives_empty_dataset() {
    let bytes = common::xlsx_bytes(&["Year", "Area", "Price"], &[]);
    let ds = normalize_bytes(&bytes).unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.columns(), &["year", "area", "price"]);
}

#[test]
fn gaps_in_rows_read_as_empty_cells() {
    let bytes = common::xlsx_bytes(
        &["Year", "Area", "Price"],
        &[vec![num(2020.0), empty(), num(10.0)]],
    );
    let table = load_bytes(&bytes).unwrap();
    assert_eq!(table.rows[0][1], CellValue::Empty);
}

#[test]
fn corrupt_bytes_are_a_parse_error() {
    let err = load_bytes(b"definitely not a spreadsheet").unwrap_err();
    assert!(matches!(err, RealtyError::DatasetParse(_)));
}

#[test]
fn empty_bytes_are_a_parse_error() {
    let err = normalize_bytes(&[]).unwrap_err();
    assert!(matches!(err, RealtyError::DatasetParse(_)));
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.xlsx");
    std::fs::write(&path, b"PK\x03\x04 truncated").unwrap();
    let err = load_path(&path).unwrap_err();
    assert!(matches!(err, RealtyError::DatasetParse(_)));
}
