//! The cell-level diff engine
//!
//! Comparison is purely positional: a cell is matched with the cell at the same
//! (row, column) in the other workbook. Values are compared as the normalized strings
//! the extractor produced, so a numeric `5` and the text `"5"` are equal.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::coordinate::Coordinate;
use crate::grid::{Grid, Snapshot};
use crate::progress::{NoopObserver, ProgressEvent, ProgressObserver};

/// Default length above which a value is rendered out of line
pub const DEFAULT_LONG_VALUE_THRESHOLD: usize = 50;

/// Options for [`diff`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// A change whose old or new value is longer than this many characters is
    /// classified as [`DisplayForm::Overflow`] (default: 50)
    pub long_value_threshold: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            long_value_threshold: DEFAULT_LONG_VALUE_THRESHOLD,
        }
    }
}

impl DiffOptions {
    pub fn with_threshold(long_value_threshold: usize) -> Self {
        Self {
            long_value_threshold,
        }
    }
}

/// How a change should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayForm {
    /// Both values are short enough to show in the summary table
    Inline,
    /// At least one value exceeds the threshold and is shown in its own block
    Overflow,
}

impl DisplayForm {
    /// Classify a pair of values against a length threshold
    ///
    /// Length is counted in characters; an absent value counts as length 0.
    pub fn classify(old: Option<&str>, new: Option<&str>, threshold: usize) -> Self {
        let too_long = |v: Option<&str>| v.map_or(false, |s| s.chars().count() > threshold);
        if too_long(old) || too_long(new) {
            DisplayForm::Overflow
        } else {
            DisplayForm::Inline
        }
    }
}

/// Which sides of a change hold a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChangeKind {
    /// Empty before, populated after
    Added,
    /// Populated before, empty after
    Removed,
    /// Populated on both sides with different values
    Modified,
}

/// A difference at one coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellChange {
    coordinate: Coordinate,
    old: Option<String>,
    new: Option<String>,
    display: DisplayForm,
}

impl CellChange {
    /// Build a change, or `None` if the two values are equal
    ///
    /// Two absent values are equal; an absent value never equals a present one, even an
    /// empty string.
    pub fn between(
        coordinate: Coordinate,
        old: Option<&str>,
        new: Option<&str>,
        threshold: usize,
    ) -> Option<Self> {
        if old == new {
            return None;
        }
        Some(Self {
            coordinate,
            old: old.map(str::to_owned),
            new: new.map(str::to_owned),
            display: DisplayForm::classify(old, new, threshold),
        })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Value before the change, `None` if the cell was empty
    pub fn old_value(&self) -> Option<&str> {
        self.old.as_deref()
    }

    /// Value after the change, `None` if the cell is now empty
    pub fn new_value(&self) -> Option<&str> {
        self.new.as_deref()
    }

    pub fn display_form(&self) -> DisplayForm {
        self.display
    }

    pub fn is_overflow(&self) -> bool {
        self.display == DisplayForm::Overflow
    }

    pub fn kind(&self) -> ChangeKind {
        match (&self.old, &self.new) {
            (None, _) => ChangeKind::Added,
            (_, None) => ChangeKind::Removed,
            _ => ChangeKind::Modified,
        }
    }
}

/// Cell changes for one sheet present in both snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetDiff {
    name: String,
    changes: Vec<CellChange>,
}

impl SheetDiff {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes in (row, column) order; empty if the sheet is unchanged
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Changes that need an out-of-line block
    pub fn overflow_changes(&self) -> impl Iterator<Item = &CellChange> + '_ {
        self.changes.iter().filter(|c| c.is_overflow())
    }
}

/// Outcome of comparing two snapshots
///
/// Added sheets are listed in the new workbook's order; removed and compared sheets in
/// the old workbook's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiffResult {
    added: Vec<String>,
    removed: Vec<String>,
    sheets: Vec<SheetDiff>,
}

impl DiffResult {
    /// Sheets only in the new snapshot
    pub fn added_sheets(&self) -> &[String] {
        &self.added
    }

    /// Sheets only in the old snapshot
    pub fn removed_sheets(&self) -> &[String] {
        &self.removed
    }

    /// Every sheet present on both sides, including unchanged ones
    pub fn sheets(&self) -> &[SheetDiff] {
        &self.sheets
    }

    /// Look up a compared sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetDiff> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Total changed cells across all compared sheets
    pub fn total_changes(&self) -> usize {
        self.sheets.iter().map(|s| s.changes.len()).sum()
    }

    /// Changed cells classified as overflow
    pub fn overflow_count(&self) -> usize {
        self.sheets.iter().map(|s| s.overflow_changes().count()).sum()
    }

    /// True when no sheet was added or removed and no cell changed
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.total_changes() == 0
    }
}

/// Compare two snapshots
pub fn diff(old: &Snapshot, new: &Snapshot, options: &DiffOptions) -> DiffResult {
    diff_with_observer(old, new, options, &mut NoopObserver)
}

/// Compare two snapshots, reporting progress to `observer`
pub fn diff_with_observer(
    old: &Snapshot,
    new: &Snapshot,
    options: &DiffOptions,
    observer: &mut dyn ProgressObserver,
) -> DiffResult {
    let mut result = DiffResult::default();

    for name in new.sheet_names().filter(|n| !old.contains(n)) {
        observer.on_event(&ProgressEvent::SheetAdded {
            sheet: name.to_string(),
        });
        result.added.push(name.to_string());
    }

    for (name, old_grid) in old.iter() {
        let Some(new_grid) = new.get(name) else {
            observer.on_event(&ProgressEvent::SheetRemoved {
                sheet: name.to_string(),
            });
            result.removed.push(name.to_string());
            continue;
        };

        let mut examined = 0;
        let mut changes = Vec::new();
        for (coord, old_value, new_value) in merge_cells(old_grid, new_grid) {
            examined += 1;
            if let Some(change) =
                CellChange::between(coord, old_value, new_value, options.long_value_threshold)
            {
                changes.push(change);
            }
        }

        let sheet = SheetDiff {
            name: name.to_string(),
            changes,
        };
        observer.on_event(&ProgressEvent::SheetCompared {
            sheet: name.to_string(),
            cells_examined: examined,
            changes: sheet.changes.len(),
            overflow: sheet.overflow_changes().count(),
        });
        result.sheets.push(sheet);
    }

    observer.on_event(&ProgressEvent::DiffFinished {
        added: result.added.len(),
        removed: result.removed.len(),
        compared: result.sheets.len(),
        changes: result.total_changes(),
    });

    result
}

/// Walk the union of both grids' coordinates in (row, column) order
fn merge_cells<'a>(old: &'a Grid, new: &'a Grid) -> MergeCells<'a> {
    let old: CellIter<'a> = Box::new(old.iter());
    let new: CellIter<'a> = Box::new(new.iter());
    MergeCells {
        old: old.peekable(),
        new: new.peekable(),
    }
}

type CellIter<'a> = Box<dyn Iterator<Item = (Coordinate, &'a str)> + 'a>;

struct MergeCells<'a> {
    old: Peekable<CellIter<'a>>,
    new: Peekable<CellIter<'a>>,
}

impl<'a> Iterator for MergeCells<'a> {
    type Item = (Coordinate, Option<&'a str>, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.old.peek(), self.new.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((a, _)), Some((b, _))) => a.cmp(b),
        };

        match order {
            Ordering::Less => {
                let (coord, value) = self.old.next()?;
                Some((coord, Some(value), None))
            }
            Ordering::Greater => {
                let (coord, value) = self.new.next()?;
                Some((coord, None, Some(value)))
            }
            Ordering::Equal => {
                let (coord, old_value) = self.old.next()?;
                let (_, new_value) = self.new.next()?;
                Some((coord, Some(old_value), Some(new_value)))
            }
        }
    }
}
