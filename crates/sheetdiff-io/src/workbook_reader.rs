//! Spreadsheet files via calamine

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use sheetdiff_core::{Coordinate, GridBuilder, Snapshot};

use crate::error::ExtractResult;
use crate::normalize::normalize_value;

/// Read every sheet of a workbook, in tab order
///
/// Formula cells yield their cached result; the formula text is never compared.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> ExtractResult<Snapshot> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let mut snapshot = Snapshot::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        // Range iterators are relative to `range.start()`, which is 0-based.
        let (start_row, start_col) = range.start().unwrap_or((0, 0));

        let mut grid = GridBuilder::new();
        let mut skipped = 0usize;
        for (row, col, value) in range.used_cells() {
            let Some(text) = normalize_value(value) else {
                continue;
            };
            match absolute_coordinate(start_row, start_col, row, col) {
                Some(coord) => {
                    grid.set(coord, text);
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("sheet '{sheet_name}': skipped {skipped} cells outside the addressable range");
        }
        log::debug!(
            "loaded sheet '{sheet_name}' from {}: {} cells",
            path.display(),
            grid.len()
        );
        snapshot.insert(sheet_name, grid.build())?;
    }

    Ok(snapshot)
}

fn absolute_coordinate(start_row: u32, start_col: u32, row: usize, col: usize) -> Option<Coordinate> {
    let row = u32::try_from(row).ok()?.checked_add(start_row)?.checked_add(1)?;
    let col = u32::try_from(col).ok()?.checked_add(start_col)?.checked_add(1)?;
    Coordinate::new(row, col).ok()
}
