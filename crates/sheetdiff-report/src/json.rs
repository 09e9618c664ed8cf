//! JSON report output

use serde::Serialize;
use sheetdiff_core::DiffResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    target: &'a str,
    summary: Summary,
    #[serde(flatten)]
    result: &'a DiffResult,
}

#[derive(Serialize)]
struct Summary {
    identical: bool,
    added_sheets: usize,
    removed_sheets: usize,
    compared_sheets: usize,
    changed_cells: usize,
    overflow_cells: usize,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a DiffResult, source: &'a str, target: &'a str) -> Self {
        Self {
            source,
            target,
            summary: Summary {
                identical: result.is_identical(),
                added_sheets: result.added_sheets().len(),
                removed_sheets: result.removed_sheets().len(),
                compared_sheets: result.sheets().len(),
                changed_cells: result.total_changes(),
                overflow_cells: result.overflow_count(),
            },
            result,
        }
    }
}

/// Serialize a diff result as a single-line JSON document
pub fn render_json(result: &DiffResult, source_label: &str, target_label: &str) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport::new(result, source_label, target_label))
}

/// Serialize a diff result as indented JSON
pub fn render_json_pretty(
    result: &DiffResult,
    source_label: &str,
    target_label: &str,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(result, source_label, target_label))
}
