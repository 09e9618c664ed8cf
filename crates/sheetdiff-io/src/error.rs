//! Extraction error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while loading a snapshot
#[derive(Debug, Error)]
pub enum ExtractError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook decoder error
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// File extension not handled by any decoder
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A cell position does not fit the coordinate range
    #[error("Cell at row {row}, column {column} of sheet '{sheet}' is out of range")]
    OutOfRange {
        sheet: String,
        row: usize,
        column: usize,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetdiff_core::Error),
}
