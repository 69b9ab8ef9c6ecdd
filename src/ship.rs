//! Ship descriptors and the cell runs they cover.

use core::fmt;
use core::str::FromStr;

use crate::common::{InputError, PlacementError};
use crate::config::{GRID, MAX_SHIPS};
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(d_row, d_col)` along the ship.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl FromStr for Orientation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" | "H" => Ok(Orientation::Horizontal),
            "v" | "V" => Ok(Orientation::Vertical),
            _ => Err(InputError::InvalidOrientation),
        }
    }
}

/// A ship descriptor. Ship `id` is always `id` cells long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    id: u8,
}

impl ShipType {
    /// Descriptor for ship `id` (1-based).
    pub const fn new(id: u8) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Ship's length, equal to its id.
    pub fn length(&self) -> usize {
        self.id as usize
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship {} (length {})", self.id, self.length())
    }
}

/// A ship anchored at its upper-left cell with an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    ship: ShipType,
    orientation: Orientation,
    origin: Coordinate,
}

impl Placement {
    /// Validate that the whole run fits on the board.
    pub fn new(
        ship: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, PlacementError> {
        let len = ship.length();
        if ship.id() == 0 || ship.id() as usize > MAX_SHIPS {
            return Err(PlacementError::InvalidShip);
        }
        if row >= GRID || col >= GRID {
            return Err(PlacementError::OutOfBounds);
        }
        let fits = match orientation {
            Orientation::Horizontal => col + len <= GRID,
            Orientation::Vertical => row + len <= GRID,
        };
        if !fits {
            return Err(PlacementError::OutOfBounds);
        }
        Ok(Self {
            ship,
            orientation,
            origin: Coordinate { row, col },
        })
    }

    pub fn ship(&self) -> ShipType {
        self.ship
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let Coordinate { row, col } = self.origin;
        (0..self.ship.length()).map(move |i| Coordinate {
            row: row + dr * i,
            col: col + dc * i,
        })
    }
}
