//! Letter+number coordinate codec.
//!
//! A coordinate is written as one column letter `A`-`J` (either case)
//! followed by a row number `1`-`10`, e.g. `A1`, `j10`. Internally rows and
//! columns are zero-based.

use core::fmt;
use core::str::FromStr;

use crate::common::InputError;
use crate::config::GRID;

/// A zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Build a coordinate, rejecting positions off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, InputError> {
        if row >= GRID || col >= GRID {
            return Err(InputError::OutOfBounds);
        }
        Ok(Self { row, col })
    }

    /// Step `steps` cells from here along `(d_row, d_col)`, if still on the board.
    pub fn offset(self, d_row: isize, d_col: isize, steps: usize) -> Option<Self> {
        let row = self.row as isize + d_row * steps as isize;
        let col = self.col as isize + d_col * steps as isize;
        if row < 0 || col < 0 {
            return None;
        }
        Coordinate::new(row as usize, col as usize).ok()
    }
}

/// Parse `[A-Ja-j](10|[1-9])` into a coordinate.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, InputError> {
    let bytes = input.as_bytes();
    if bytes.len() < 2 || bytes.len() > 3 {
        return Err(InputError::MalformedCoordinate);
    }
    let letter = bytes[0].to_ascii_uppercase();
    if !(b'A'..b'A' + GRID as u8).contains(&letter) {
        return Err(InputError::MalformedCoordinate);
    }
    let row = match &bytes[1..] {
        [d @ b'1'..=b'9'] => (d - b'0') as usize,
        b"10" => 10,
        _ => return Err(InputError::MalformedCoordinate),
    };
    Coordinate::new(row - 1, (letter - b'A') as usize)
}

/// Canonical uppercase text for `c`.
#[cfg(feature = "std")]
pub fn format_coordinate(c: Coordinate) -> std::string::String {
    std::format!("{}", c)
}

impl FromStr for Coordinate {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s.trim())
    }
}

/// Canonical uppercase form, e.g. `C7`. Positions off the board print as
/// raw `(row, col)` indices.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row >= GRID || self.col >= GRID {
            return write!(f, "({}, {})", self.row, self.col);
        }
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_cases_and_row_ten() {
        assert_eq!(parse_coordinate("a1"), Ok(Coordinate { row: 0, col: 0 }));
        assert_eq!(parse_coordinate("J10"), Ok(Coordinate { row: 9, col: 9 }));
        assert_eq!(parse_coordinate("c7"), Ok(Coordinate { row: 6, col: 2 }));
    }

    #[test]
    fn rejects_bad_grammar() {
        for bad in ["", "A", "A0", "A11", "K1", "1A", "A01", "AA1", "A100", "é1"] {
            assert_eq!(parse_coordinate(bad), Err(InputError::MalformedCoordinate), "{bad}");
        }
    }

    #[test]
    fn offset_stays_on_board() {
        let c = Coordinate::new(0, 9).unwrap();
        assert_eq!(c.offset(-1, 0, 1), None);
        assert_eq!(c.offset(0, 1, 1), None);
        assert_eq!(c.offset(1, -1, 3), Some(Coordinate { row: 3, col: 6 }));
    }
}
