//! # sheetdiff-io
//!
//! Turns workbook files into [`Snapshot`]s for the diff engine.
//!
//! Decoding is delegated: spreadsheet formats go through `calamine`, CSV through the
//! `csv` crate. This crate only walks their output and normalizes every populated cell
//! to a string, so that the engine compares like with like.

mod csv_reader;
mod error;
mod normalize;
mod options;
mod workbook_reader;

pub use csv_reader::{read_csv, read_csv_file};
pub use error::{ExtractError, ExtractResult};
pub use normalize::{format_datetime, format_number, normalize_value};
pub use options::{ExtractOptions, SourceFormat};
pub use workbook_reader::read_workbook;

use std::path::Path;

use sheetdiff_core::Snapshot;

/// Load a file into a snapshot, choosing the decoder from the file extension
///
/// `xlsx`, `xlsm`, `xlsb`, `xls` and `ods` are read with calamine; `csv` and `tsv` are
/// read as a single sheet.
pub fn open_snapshot<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> ExtractResult<Snapshot> {
    let path = path.as_ref();
    match SourceFormat::from_path(path)? {
        SourceFormat::Workbook => read_workbook(path),
        SourceFormat::Csv => read_csv_file(path, options),
        SourceFormat::Tsv => {
            let options = ExtractOptions {
                delimiter: Some(options.delimiter.unwrap_or(b'\t')),
                ..options.clone()
            };
            read_csv_file(path, &options)
        }
    }
}
