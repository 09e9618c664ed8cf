//! # sheetdiff-report
//!
//! Renders a [`DiffResult`](sheetdiff_core::DiffResult) as a Markdown change report or
//! as JSON.
//!
//! The Markdown report has a table per compared sheet. Values longer than the diff
//! threshold are not placed in the table; the table links to a separate block holding
//! the full value, through an anchor unique to (sheet, cell, side).

mod anchor;
mod json;
mod labels;
mod markdown;

pub use anchor::{AnchorKey, Side};
pub use json::{render_json, render_json_pretty};
pub use labels::{ReportLabels, ReportOptions};
pub use markdown::{render, render_with};
