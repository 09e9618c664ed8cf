//! # sheetdiff-core
//!
//! Core data structures and the cell-level diff engine for sheetdiff.
//!
//! This crate provides the fundamental types used throughout sheetdiff:
//! - [`Coordinate`] - 1-based (row, column) positions and the A1 column codec
//! - [`Grid`] and [`Snapshot`] - Sparse per-sheet cell maps and whole-workbook snapshots
//! - [`diff`] - Reconciles two snapshots into a [`DiffResult`]
//! - [`ProgressObserver`] - Optional progress reporting for the engine and renderers
//!
//! ## Example
//!
//! ```rust
//! use sheetdiff_core::{diff, DiffOptions, Grid, Snapshot};
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
//! assert_eq!(result.total_changes(), 1);
//! assert_eq!(result.sheets()[0].changes()[0].coordinate().to_string(), "A2");
//! ```

pub mod coordinate;
pub mod diff;
pub mod error;
pub mod grid;
pub mod progress;

// Re-exports for convenience
pub use coordinate::{column_index, column_label, display_coordinate, Coordinate};
pub use diff::{
    diff, diff_with_observer, CellChange, ChangeKind, DiffOptions, DiffResult, DisplayForm,
    SheetDiff, DEFAULT_LONG_VALUE_THRESHOLD,
};
pub use error::{Error, Result};
pub use grid::{Grid, GridBuilder, Snapshot};
pub use progress::{LogObserver, NoopObserver, ProgressEvent, ProgressObserver, RecordingObserver};
