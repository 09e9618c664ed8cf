//! Error types for sheetdiff-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetdiff-core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row or column index outside the 1-based domain
    #[error("Invalid coordinate: row {row}, column {col} (both must be >= 1)")]
    InvalidCoordinate { row: u32, col: u32 },

    /// Invalid A1-style address or column label
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Duplicate sheet name within one snapshot
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}
