//! Markdown report renderer

use sheetdiff_core::{
    CellChange, DiffResult, NoopObserver, ProgressEvent, ProgressObserver, SheetDiff,
};

use crate::anchor::{AnchorKey, Side};
use crate::labels::ReportOptions;

/// Render a diff result as Markdown with the default (English) labels
///
/// `source_label` and `target_label` name the old and new workbooks and are printed
/// verbatim in the provenance lines.
pub fn render(result: &DiffResult, source_label: &str, target_label: &str) -> String {
    render_with(
        result,
        source_label,
        target_label,
        &ReportOptions::default(),
        &mut NoopObserver,
    )
}

/// Render a diff result as Markdown
pub fn render_with(
    result: &DiffResult,
    source_label: &str,
    target_label: &str,
    options: &ReportOptions,
    observer: &mut dyn ProgressObserver,
) -> String {
    let labels = &options.labels;
    let mut doc = Document::default();

    doc.line(format!("# {}", labels.title));
    doc.blank();
    doc.line(format!("- {}: {}", labels.source, code_span(source_label)));
    doc.line(format!("- {}: {}", labels.target, code_span(target_label)));
    doc.blank();

    sheet_list(&mut doc, &labels.added_sheets, result.added_sheets());
    sheet_list(&mut doc, &labels.removed_sheets, result.removed_sheets());

    for sheet in result.sheets() {
        let (rows, overflow_blocks) = sheet_section(&mut doc, sheet, options);
        observer.on_event(&ProgressEvent::SheetRendered {
            sheet: sheet.name().to_string(),
            rows,
            overflow_blocks,
        });
    }

    let text = doc.finish();
    observer.on_event(&ProgressEvent::RenderFinished { bytes: text.len() });
    text
}

#[derive(Default)]
struct Document {
    lines: Vec<String>,
}

impl Document {
    fn line<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(mut self) -> String {
        while self.lines.last().map_or(false, String::is_empty) {
            self.lines.pop();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn sheet_list(doc: &mut Document, heading: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    doc.line(format!("## {}", heading));
    doc.blank();
    for name in names {
        doc.line(format!("- {}", escape_text(name)));
    }
    doc.blank();
}

/// Emit one compared sheet; returns (table rows, overflow blocks)
fn sheet_section(doc: &mut Document, sheet: &SheetDiff, options: &ReportOptions) -> (usize, usize) {
    let labels = &options.labels;

    doc.line(format!("## {}: {}", labels.sheet, escape_text(sheet.name())));
    doc.blank();

    if !sheet.has_changes() {
        doc.line(labels.no_changes.as_str());
        doc.blank();
        return (0, 0);
    }

    doc.line(format!(
        "| {} | {} | {} |",
        escape_cell(&labels.cell_column),
        escape_cell(&labels.old_column),
        escape_cell(&labels.new_column)
    ));
    doc.line("| --- | --- | --- |");
    for change in sheet.changes() {
        let (old, new) = table_values(sheet.name(), change, options);
        doc.line(format!("| {} | {} | {} |", change.coordinate(), old, new));
    }
    doc.blank();

    let mut blocks = 0;
    for change in sheet.overflow_changes() {
        overflow_block(doc, sheet.name(), change, options);
        blocks += 1;
    }

    (sheet.changes().len(), blocks)
}

fn table_values(sheet: &str, change: &CellChange, options: &ReportOptions) -> (String, String) {
    if !change.is_overflow() {
        return (
            escape_cell(change.old_value().unwrap_or("")),
            escape_cell(change.new_value().unwrap_or("")),
        );
    }

    let labels = &options.labels;
    let link = |value: Option<&str>, side: Side, text: &str| match value {
        Some(_) => {
            let key = AnchorKey::new(sheet, change.coordinate(), side);
            format!("[{}](#{})", escape_cell(text), key.fragment())
        }
        // No block is emitted for an absent side, so there is nothing to link to.
        None => String::new(),
    };

    (
        link(change.old_value(), Side::Old, labels.old_link.as_str()),
        link(change.new_value(), Side::New, labels.new_link.as_str()),
    )
}

fn overflow_block(doc: &mut Document, sheet: &str, change: &CellChange, options: &ReportOptions) {
    let labels = &options.labels;

    doc.line(format!("### {} {}", escape_text(sheet), change.coordinate()));
    doc.blank();

    let sides = [
        (Side::Old, change.old_value(), &labels.old_value),
        (Side::New, change.new_value(), &labels.new_value),
    ];
    for (side, value, heading) in sides {
        let Some(value) = value else {
            continue;
        };
        let key = AnchorKey::new(sheet, change.coordinate(), side);
        doc.line(format!("#### <a name=\"{}\"></a>{}", key.fragment(), heading));
        doc.blank();
        let fence = fence_for(value);
        doc.line(fence.as_str());
        doc.line(value);
        doc.line(fence);
        doc.blank();
    }
}

/// Make a value render literally inside a Markdown table cell
fn escape_cell(value: &str) -> String {
    escape_text(value)
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('\r', "<br>")
}

/// Literal text outside a table: backslashes survive and HTML stays inert
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn longest_backtick_run(value: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in value.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// A code fence that cannot be closed early by the value it wraps
fn fence_for(value: &str) -> String {
    "`".repeat((longest_backtick_run(value) + 1).max(3))
}

/// An inline code span holding `value` verbatim
fn code_span(value: &str) -> String {
    let ticks = "`".repeat(longest_backtick_run(value) + 1);
    if value.starts_with('`') || value.ends_with('`') {
        format!("{ticks} {value} {ticks}")
    } else {
        format!("{ticks}{value}{ticks}")
    }
}
