//! # sheetdiff
//!
//! Compare two versions of a spreadsheet workbook cell by cell and produce a readable
//! change report.
//!
//! ## Features
//!
//! - Reads XLSX, XLSM, XLSB, XLS and ODS workbooks, plus CSV/TSV as a single sheet
//! - Reports added and removed sheets and every changed cell, in (row, column) order
//! - Long values are moved out of the summary table into linked blocks
//! - Markdown (English or Japanese headings) and JSON output
//!
//! ## Example
//!
//! ```rust
//! use sheetdiff::prelude::*;
//!
//! let mut old = Snapshot::new();
//! old.insert("Sheet1", Grid::from_cells([((1, 1), "5"), ((2, 1), "10")]).unwrap())
//!     .unwrap();
//!
//! let mut new = Snapshot::new();
//! new.insert("Sheet1", Grid::from_cells([((1, 1), "5"), ((2, 1), "12")]).unwrap())
//!     .unwrap();
//!
//! let result = diff(&old, &new, &DiffOptions::default());
//! let report = render(&result, "old.xlsx", "new.xlsx");
//! assert!(report.contains("| A2 | 10 | 12 |"));
//! ```

pub mod compare;
pub mod prelude;

pub use compare::{compare_files, CompareError, CompareOptions};

// Re-export core types
pub use sheetdiff_core::{
    column_index,
    column_label,
    diff,
    diff_with_observer,
    display_coordinate,
    CellChange,
    ChangeKind,
    Coordinate,
    DiffOptions,
    DiffResult,
    DisplayForm,
    // Error types
    Error,
    Grid,
    GridBuilder,
    // Progress reporting
    LogObserver,
    NoopObserver,
    ProgressEvent,
    ProgressObserver,
    RecordingObserver,
    Result,
    SheetDiff,
    Snapshot,
    // Constants
    DEFAULT_LONG_VALUE_THRESHOLD,
};

// Re-export report types
pub use sheetdiff_report::{
    render, render_json, render_json_pretty, render_with, AnchorKey, ReportLabels,
    ReportOptions, Side,
};

// Re-export I/O types
pub use sheetdiff_io::{
    open_snapshot, read_csv, read_csv_file, read_workbook, ExtractError, ExtractOptions,
    ExtractResult, SourceFormat,
};

use std::path::Path;

/// Extension trait for Snapshot to add file loading
pub trait SnapshotExt: Sized {
    /// Open a workbook or CSV file with default options
    fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self>;

    /// Open a workbook or CSV file
    fn open_with<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> ExtractResult<Self>;
}

impl SnapshotExt for Snapshot {
    fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Snapshot> {
        open_snapshot(path, &ExtractOptions::default())
    }

    fn open_with<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> ExtractResult<Snapshot> {
        open_snapshot(path, options)
    }
}
