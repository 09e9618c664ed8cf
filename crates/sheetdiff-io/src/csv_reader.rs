//! CSV files as single-sheet snapshots

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sheetdiff_core::{GridBuilder, Snapshot};

use crate::error::{ExtractError, ExtractResult};
use crate::options::ExtractOptions;

/// Read a CSV file into a one-sheet snapshot
///
/// The sheet is named after the file stem unless `options.csv_sheet_name` is set.
pub fn read_csv_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> ExtractResult<Snapshot> {
    let path = path.as_ref();
    let sheet_name = match &options.csv_sheet_name {
        Some(name) => name.clone(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sheet1".to_string()),
    };

    let file = File::open(path)?;
    read_csv(file, &sheet_name, options)
}

/// Read CSV from a reader into a one-sheet snapshot
///
/// Fields are kept verbatim: no trimming and no type detection. Empty fields are empty
/// cells. Records may have differing lengths.
pub fn read_csv<R: Read>(reader: R, sheet_name: &str, options: &ExtractOptions) -> ExtractResult<Snapshot> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter.unwrap_or(b','))
        .quote(options.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = GridBuilder::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result?;

        for (col_idx, field) in record.iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            let out_of_range = || ExtractError::OutOfRange {
                sheet: sheet_name.to_string(),
                row: row_idx + 1,
                column: col_idx + 1,
            };
            let row = u32::try_from(row_idx + 1).map_err(|_| out_of_range())?;
            let col = u32::try_from(col_idx + 1).map_err(|_| out_of_range())?;
            grid.set_at(row, col, field)?;
        }
    }

    log::debug!("loaded CSV sheet '{sheet_name}': {} cells", grid.len());

    let mut snapshot = Snapshot::new();
    snapshot.insert(sheet_name, grid.build())?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetdiff_core::Coordinate;

    fn cells(snapshot: &Snapshot, sheet: &str) -> Vec<(String, String)> {
        snapshot
            .get(sheet)
            .unwrap()
            .iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_csv_positions() {
        let data = "id,name\n1,alpha\n2,,x\n";
        let snapshot = read_csv(data.as_bytes(), "data", &ExtractOptions::default()).unwrap();

        assert_eq!(
            cells(&snapshot, "data"),
            vec![
                ("A1".to_string(), "id".to_string()),
                ("B1".to_string(), "name".to_string()),
                ("A2".to_string(), "1".to_string()),
                ("B2".to_string(), "alpha".to_string()),
                ("A3".to_string(), "2".to_string()),
                ("C3".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_csv_keeps_fields_verbatim() {
        let data = "\" padded \",\"a,b\",\"multi\nline\"\n";
        let snapshot = read_csv(data.as_bytes(), "s", &ExtractOptions::default()).unwrap();
        let grid = snapshot.get("s").unwrap();

        assert_eq!(grid.get(&Coordinate::new(1, 1).unwrap()), Some(" padded "));
        assert_eq!(grid.get(&Coordinate::new(1, 2).unwrap()), Some("a,b"));
        assert_eq!(grid.get(&Coordinate::new(1, 3).unwrap()), Some("multi\nline"));
    }

    #[test]
    fn test_read_csv_custom_delimiter() {
        let options = ExtractOptions {
            delimiter: Some(b';'),
            ..Default::default()
        };
        let snapshot = read_csv("a;b\n".as_bytes(), "s", &options).unwrap();
        assert_eq!(snapshot.get("s").unwrap().len(), 2);
    }

    #[test]
    fn test_read_csv_file_names_sheet_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("budget 2024.csv");
        std::fs::write(&path, "1,2\n").unwrap();

        let snapshot = read_csv_file(&path, &ExtractOptions::default()).unwrap();
        assert_eq!(snapshot.sheet_names().collect::<Vec<_>>(), vec!["budget 2024"]);

        let options = ExtractOptions {
            csv_sheet_name: Some("Sheet1".into()),
            ..Default::default()
        };
        let snapshot = read_csv_file(&path, &options).unwrap();
        assert!(snapshot.contains("Sheet1"));
    }

    #[test]
    fn test_read_csv_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_file(dir.path().join("nope.csv"), &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
