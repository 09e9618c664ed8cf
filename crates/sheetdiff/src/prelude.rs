//! Prelude module - common imports for sheetdiff users
//!
//! ```rust
//! use sheetdiff::prelude::*;
//! ```

pub use crate::{
    // Entry points
    compare_files,
    diff,
    diff_with_observer,
    render,
    render_with,

    CellChange,
    ChangeKind,
    CompareOptions,
    Coordinate,
    DiffOptions,
    DiffResult,
    DisplayForm,

    // Error types
    Error,
    ExtractError,
    ExtractOptions,
    Grid,
    GridBuilder,

    LogObserver,
    ProgressObserver,
    ReportLabels,
    ReportOptions,
    Result,
    SheetDiff,
    Snapshot,
    // Extension traits
    SnapshotExt,
};
