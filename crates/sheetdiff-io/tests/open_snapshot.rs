//! Format dispatch through `open_snapshot`

use std::fs;

use pretty_assertions::assert_eq;
use sheetdiff_core::Coordinate;
use sheetdiff_io::{open_snapshot, ExtractError, ExtractOptions};

#[test]
fn test_open_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prices.csv");
    fs::write(&path, "item,price\napple,1.5\n").unwrap();

    let snapshot = open_snapshot(&path, &ExtractOptions::default()).unwrap();
    assert_eq!(snapshot.sheet_names().collect::<Vec<_>>(), vec!["prices"]);

    let grid = snapshot.get("prices").unwrap();
    assert_eq!(grid.get(&Coordinate::parse("B2").unwrap()), Some("1.5"));
}

#[test]
fn test_open_tsv_defaults_to_tab() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prices.tsv");
    fs::write(&path, "a,b\tc\n").unwrap();

    let snapshot = open_snapshot(&path, &ExtractOptions::default()).unwrap();
    let grid = snapshot.get("prices").unwrap();
    assert_eq!(grid.get(&Coordinate::parse("A1").unwrap()), Some("a,b"));
    assert_eq!(grid.get(&Coordinate::parse("B1").unwrap()), Some("c"));
}

#[test]
fn test_open_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    let err = open_snapshot(&path, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("notes.txt"));
}

#[test]
fn test_open_corrupt_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, b"PK\x03\x04 truncated").unwrap();

    assert!(open_snapshot(&path, &ExtractOptions::default()).is_err());
}
