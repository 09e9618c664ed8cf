//! End-to-end tests for the Markdown report (snapshots -> diff -> render)

use pretty_assertions::assert_eq;
use sheetdiff_core::{diff, DiffOptions, Grid, ProgressEvent, RecordingObserver, Snapshot};
use sheetdiff_report::{render, render_with, ReportLabels, ReportOptions};

fn snapshot(sheets: &[(&str, Vec<((u32, u32), String)>)]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (name, cells) in sheets {
        snapshot
            .insert(*name, Grid::from_cells(cells.clone()).unwrap())
            .unwrap();
    }
    snapshot
}

fn cells(values: &[((u32, u32), &str)]) -> Vec<((u32, u32), String)> {
    values.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

/// Full document for a mix of added, removed, changed and unchanged sheets
#[test]
fn test_full_report_layout() {
    let old = snapshot(&[
        ("Sheet1", cells(&[((1, 1), "5"), ((2, 1), "10")])),
        ("Old", cells(&[((1, 1), "x")])),
        ("Same", cells(&[((3, 3), "keep")])),
    ]);
    let new = snapshot(&[
        ("Sheet1", cells(&[((1, 1), "5"), ((2, 1), "12"), ((3, 1), "new")])),
        ("Same", cells(&[((3, 3), "keep")])),
        ("Added", cells(&[])),
    ]);

    let result = diff(&old, &new, &DiffOptions::default());
    let text = render(&result, "old.xlsx", "new.xlsx");

    let expected = "\
# Workbook diff report

- Source: `old.xlsx`
- Target: `new.xlsx`

## Added sheets

- Added

## Removed sheets

- Old

## Sheet: Sheet1

| Cell | Old value | New value |
| --- | --- | --- |
| A2 | 10 | 12 |
| A3 |  | new |

## Sheet: Same

No changes
";
    assert_eq!(text, expected);
}

#[test]
fn test_sheet_sections_omitted_when_empty() {
    let old = snapshot(&[("S", cells(&[((1, 1), "a")]))]);
    let text = render(&diff(&old, &old, &DiffOptions::default()), "a", "b");

    assert!(!text.contains("## Added sheets"));
    assert!(!text.contains("## Removed sheets"));
    assert!(text.contains("## Sheet: S\n\nNo changes\n"));
}

#[test]
fn test_overflow_change_links_to_blocks() {
    let long = "x".repeat(80);
    let short = "y".repeat(10);
    let old = snapshot(&[("Data", vec![((1, 2), long.clone())])]);
    let new = snapshot(&[("Data", vec![((1, 2), short.clone())])]);

    let result = diff(&old, &new, &DiffOptions::with_threshold(50));
    let text = render(&result, "old.xlsx", "new.xlsx");

    assert!(text.contains("| B1 | [see old value](#Data_B1_old) | [see new value](#Data_B1_new) |"));
    assert!(!text.contains(&format!("| B1 | {}", long)));

    let blocks = format!(
        "\
### Data B1

#### <a name=\"Data_B1_old\"></a>Old value

```
{long}
```

#### <a name=\"Data_B1_new\"></a>New value

```
{short}
```
"
    );
    assert!(text.contains(&blocks), "missing overflow blocks in:\n{text}");
}

#[test]
fn test_overflow_absent_side_is_skipped() {
    let long = "z".repeat(60);
    let old = snapshot(&[("S", cells(&[]))]);
    let new = snapshot(&[("S", vec![((4, 1), long.clone())])]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");

    assert!(text.contains("| A4 |  | [see new value](#S_A4_new) |"));
    assert!(text.contains("<a name=\"S_A4_new\"></a>"));
    assert!(!text.contains("S_A4_old"));
    assert!(!text.contains("#### <a name=\"S_A4_old\""));
}

#[test]
fn test_inline_values_are_table_safe() {
    let old = snapshot(&[("S", cells(&[((1, 1), "a|b")]))]);
    let new = snapshot(&[("S", cells(&[((1, 1), "line1\nline2")]))]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");
    assert!(text.contains("| A1 | a\\|b | line1<br>line2 |"));
}

#[test]
fn test_overflow_value_with_backticks_keeps_fence_intact() {
    let value = format!("```\n{}\n```", "code ".repeat(20));
    let old = snapshot(&[("S", cells(&[]))]);
    let new = snapshot(&[("S", vec![((1, 1), value.clone())])]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");
    assert!(text.contains(&format!("````\n{value}\n````")));
}

#[test]
fn test_anchors_do_not_collide_across_sheets() {
    let long = "q".repeat(70);
    let old = snapshot(&[
        ("A_B1", vec![((1, 1), long.clone())]),
        ("A", vec![((1, 2), long.clone())]),
    ]);
    let new = snapshot(&[("A_B1", cells(&[])), ("A", cells(&[]))]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");
    assert!(text.contains("<a name=\"A.5FB1_A1_old\"></a>"));
    assert!(text.contains("<a name=\"A_B1_old\"></a>"));
}

#[test]
fn test_japanese_labels() {
    let old = snapshot(&[("Gone", cells(&[])), ("S", cells(&[((1, 1), "1")]))]);
    let new = snapshot(&[("S", cells(&[((1, 1), "1")]))]);

    let options = ReportOptions::default().with_labels(ReportLabels::japanese());
    let result = diff(&old, &new, &DiffOptions::default());
    let text = render_with(&result, "a.xlsx", "b.xlsx", &options, &mut RecordingObserver::new());

    assert!(text.starts_with("# Excel差分レポート\n\n- 比較元: `a.xlsx`\n- 比較先: `b.xlsx`\n"));
    assert!(text.contains("## 削除されたシート\n\n- Gone\n"));
    assert!(text.contains("## シート: S\n\n変更なし\n"));
}

#[test]
fn test_render_reports_progress() {
    let long = "l".repeat(51);
    let old = snapshot(&[("S", cells(&[((1, 1), "a"), ((1, 2), long.as_str())]))]);
    let new = snapshot(&[("S", cells(&[((1, 1), "b")]))]);

    let mut observer = RecordingObserver::new();
    let result = diff(&old, &new, &DiffOptions::default());
    let text = render_with(&result, "a", "b", &ReportOptions::default(), &mut observer);

    assert_eq!(
        observer.events,
        vec![
            ProgressEvent::SheetRendered {
                sheet: "S".into(),
                rows: 2,
                overflow_blocks: 1,
            },
            ProgressEvent::RenderFinished { bytes: text.len() },
        ]
    );
}

#[test]
fn test_inline_values_render_literally() {
    let old = snapshot(&[("S", cells(&[((1, 1), "C:\\|x")]))]);
    let new = snapshot(&[("S", cells(&[((1, 1), "<a name=\"S_A1_old\"></a>")]))]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");

    assert!(text.contains("| A1 | C:\\\\\\|x | &lt;a name=\"S_A1_old\"&gt;&lt;/a&gt; |"));
    assert!(!text.contains("<a name="));
}

#[test]
fn test_sheet_names_render_literally() {
    let long = "v".repeat(60);
    let old = snapshot(&[
        ("<b>R&D</b>", vec![((1, 1), long.clone())]),
        ("x\\y", cells(&[])),
    ]);
    let new = snapshot(&[("<b>R&D</b>", cells(&[]))]);

    let text = render(&diff(&old, &new, &DiffOptions::default()), "a", "b");

    assert!(text.contains("## Removed sheets\n\n- x\\\\y\n"));
    assert!(text.contains("## Sheet: &lt;b&gt;R&amp;D&lt;/b&gt;\n"));
    assert!(text.contains("### &lt;b&gt;R&amp;D&lt;/b&gt; A1\n"));
    assert!(!text.contains("<b>"));
}
