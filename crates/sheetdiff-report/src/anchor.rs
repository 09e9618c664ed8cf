//! Cross-reference anchors for overflow blocks

use std::fmt;

use sheetdiff_core::Coordinate;

/// Which value of a change an anchor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Old => "old",
            Side::New => "new",
        }
    }
}

/// Identifies one overflow value block
///
/// Kept structured until render time. [`AnchorKey::fragment`] serializes it as
/// `<escaped sheet>_<A1 cell>_<old|new>`, where the sheet name is escaped so it never
/// contains `_`: ASCII letters, digits and `-` are kept, every other UTF-8 byte is
/// written as `.HH`. Distinct keys therefore always give distinct fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorKey<'a> {
    pub sheet: &'a str,
    pub coordinate: Coordinate,
    pub side: Side,
}

impl<'a> AnchorKey<'a> {
    pub fn new(sheet: &'a str, coordinate: Coordinate, side: Side) -> Self {
        Self {
            sheet,
            coordinate,
            side,
        }
    }

    /// The anchor name, usable both in `<a name="..">` and after `#` in a link
    pub fn fragment(&self) -> String {
        let mut out = String::with_capacity(self.sheet.len() + 12);
        for b in self.sheet.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                out.push(b as char);
            } else {
                out.push_str(&format!(".{:02X}", b));
            }
        }
        out.push('_');
        out.push_str(&self.coordinate.to_a1_string());
        out.push('_');
        out.push_str(self.side.as_str());
        out
    }
}

impl fmt::Display for AnchorKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
