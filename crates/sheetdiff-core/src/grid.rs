//! Sparse sheet grids and workbook snapshots

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// The populated cells of one sheet
///
/// Keys are exactly the non-empty cells of the source sheet; values are already
/// normalized to strings. A grid has no mutating API: build it with [`GridBuilder`],
/// [`Grid::from_cells`] or `collect()`, then treat it as frozen.
///
/// An explicit empty string is a populated cell. Only a missing key means "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Coordinate, String>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from `((row, col), value)` pairs with 1-based indices
    ///
    /// Later duplicates of the same coordinate replace earlier ones.
    pub fn from_cells<I, V>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((u32, u32), V)>,
        V: Into<String>,
    {
        let mut builder = GridBuilder::new();
        for ((row, col), value) in cells {
            builder.set_at(row, col, value)?;
        }
        Ok(builder.build())
    }

    /// Value at a coordinate, or `None` if the cell is empty
    pub fn get(&self, coord: &Coordinate) -> Option<&str> {
        self.cells.get(coord).map(String::as_str)
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no populated cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over populated cells in (row, column) order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &str)> + '_ {
        self.cells.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Iterate over populated coordinates in (row, column) order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }
}

impl FromIterator<(Coordinate, String)> for Grid {
    fn from_iter<T: IntoIterator<Item = (Coordinate, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Incrementally assembles a [`Grid`]
#[derive(Debug, Default)]
pub struct GridBuilder {
    cells: BTreeMap<Coordinate, String>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value at a coordinate, replacing any previous value
    pub fn set<V: Into<String>>(&mut self, coord: Coordinate, value: V) -> &mut Self {
        self.cells.insert(coord, value.into());
        self
    }

    /// Set the value at 1-based row/column indices
    pub fn set_at<V: Into<String>>(&mut self, row: u32, col: u32, value: V) -> Result<&mut Self> {
        let coord = Coordinate::new(row, col)?;
        Ok(self.set(coord, value))
    }

    /// Number of cells set so far
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Freeze the builder into a grid
    pub fn build(self) -> Grid {
        Grid { cells: self.cells }
    }
}

/// All sheets of one workbook at one point in time
///
/// Sheets keep the order they were inserted in, which is the workbook's tab order when
/// produced by an extractor.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    sheets: Vec<(String, Grid)>,
    index: AHashMap<String, usize>,
}

impl Snapshot {
    /// Create a snapshot with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet
    ///
    /// Sheet names are compared exactly (case-sensitive); a repeated name is rejected.
    pub fn insert<S: Into<String>>(&mut self, name: S, grid: Grid) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateSheetName(name));
        }
        self.index.insert(name.clone(), self.sheets.len());
        self.sheets.push((name, grid));
        Ok(())
    }

    /// Get a sheet's grid by name
    pub fn get(&self, name: &str) -> Option<&Grid> {
        self.index.get(name).map(|&i| &self.sheets[i].1)
    }

    /// Check if a sheet exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the snapshot has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sheets.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, grid)` pairs in workbook order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grid)> + '_ {
        self.sheets.iter().map(|(name, grid)| (name.as_str(), grid))
    }

    /// Total populated cells across all sheets
    pub fn cell_count(&self) -> usize {
        self.sheets.iter().map(|(_, grid)| grid.len()).sum()
    }
}
