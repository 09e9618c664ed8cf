//! Cell coordinates and the spreadsheet column codec

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell position within one sheet (e.g., "A1", "AB5")
///
/// Both components are 1-based, matching what a spreadsheet displays. Ordering is by
/// row first, then column, which is the order changes are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u32,
    col: u32,
}

impl Coordinate {
    /// Create a coordinate from 1-based row and column indices
    ///
    /// # Examples
    /// ```
    /// use sheetdiff_core::Coordinate;
    ///
    /// let coord = Coordinate::new(5, 28).unwrap();
    /// assert_eq!(coord.to_string(), "AB5");
    ///
    /// assert!(Coordinate::new(0, 1).is_err());
    /// ```
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row == 0 || col == 0 {
            return Err(Error::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index (1-based, A = 1)
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Parse a coordinate from A1-style notation
    ///
    /// `$` markers are accepted and ignored; a diff has no notion of absolute references.
    ///
    /// # Examples
    /// ```
    /// use sheetdiff_core::Coordinate;
    ///
    /// let coord = Coordinate::parse("AB5").unwrap();
    /// assert_eq!((coord.row(), coord.col()), (5, 28));
    ///
    /// let coord = Coordinate::parse("$c$10").unwrap();
    /// assert_eq!((coord.row(), coord.col()), (10, 3));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let s_no_dollar: String = s.chars().filter(|c| *c != '$').collect();
        let split = s_no_dollar
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s_no_dollar.len());

        let (letters, digits) = s_no_dollar.split_at(split);
        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = column_index(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = letters_for(self.col);
        result.push_str(&self.row.to_string());
        result
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Coordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Coordinate", 3)?;
        state.serialize_field("row", &self.row)?;
        state.serialize_field("col", &self.col)?;
        state.serialize_field("address", &self.to_a1_string())?;
        state.end()
    }
}

impl TryFrom<(u32, u32)> for Coordinate {
    type Error = Error;

    fn try_from((row, col): (u32, u32)) -> Result<Self> {
        Self::new(row, col)
    }
}

/// Convert a 1-based column index to its letter label (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Bijective base 26: the letters A-Z are the digits 1-26 and there is no zero digit,
/// so column 0 has no label and is rejected.
///
/// # Examples
/// ```
/// use sheetdiff_core::column_label;
///
/// assert_eq!(column_label(1).unwrap(), "A");
/// assert_eq!(column_label(53).unwrap(), "BA");
/// assert!(column_label(0).is_err());
/// ```
pub fn column_label(col: u32) -> Result<String> {
    if col == 0 {
        return Err(Error::InvalidAddress(
            "column index must be >= 1".into(),
        ));
    }
    Ok(letters_for(col))
}

/// Convert column letters back to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(format!("column '{}' is too large", letters)))?;
    }

    Ok(col)
}

/// Display form of a cell position, e.g. row 5, column 28 -> "AB5"
pub fn display_coordinate(row: u32, col: u32) -> Result<String> {
    Coordinate::new(row, col).map(|c| c.to_a1_string())
}

// Callers guarantee `n >= 1`.
fn letters_for(mut n: u32) -> String {
    let mut buf = Vec::with_capacity(4);
    while n > 0 {
        n -= 1;
        buf.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    buf.reverse();
    // Only ASCII capitals were pushed.
    buf.into_iter().map(char::from).collect()
}
