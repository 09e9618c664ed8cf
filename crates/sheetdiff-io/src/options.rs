//! Extraction options

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// Options for loading snapshots
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// CSV field delimiter (default: comma, or tab for `.tsv` files)
    pub delimiter: Option<u8>,
    /// CSV quote character (default: double quote)
    pub quote: u8,
    /// Sheet name for CSV input (default: the file stem)
    pub csv_sheet_name: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            csv_sheet_name: None,
        }
    }
}

/// Input kinds recognized by [`open_snapshot`](crate::open_snapshot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Any spreadsheet format calamine decodes
    Workbook,
    Csv,
    Tsv,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Ok(SourceFormat::Workbook)
            }
            Some("csv") => Ok(SourceFormat::Csv),
            Some("tsv") => Ok(SourceFormat::Tsv),
            _ => Err(ExtractError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
