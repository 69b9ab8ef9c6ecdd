//! Game board: a 10×10 grid of cell states with placement, shots,
//! airstrikes and the win check.

use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::common::{GameError, HitResult, PlacementError};
use crate::config::{GRID, PLACEMENT_ATTEMPTS};
use crate::coord::{parse_coordinate, Coordinate};
use crate::fleet::Fleet;
use crate::ship::{Orientation, Placement, ShipType};

/// State of one grid position.
///
/// Transitions are one-way: `Water -> Miss` and `Ship(_) -> Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship(u8),
    Hit,
    Miss,
}

impl Cell {
    /// `true` once a shot has landed here.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Display symbol for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Ship,
    Hit,
    /// Listed in the legend only; sunk segments render as `Hit`.
    Sunk,
    Open,
    Miss,
}

impl Symbol {
    pub const LEGEND: [(Symbol, &'static str); 5] = [
        (Symbol::Ship, "Ship"),
        (Symbol::Hit, "Ship hit"),
        (Symbol::Sunk, "Ship sunk"),
        (Symbol::Open, "Open spot"),
        (Symbol::Miss, "Missfire"),
    ];

    pub fn as_char(self) -> char {
        match self {
            Symbol::Ship => 'O',
            Symbol::Hit => 'X',
            Symbol::Sunk => '*',
            Symbol::Open => '~',
            Symbol::Miss => '.',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Presentation grid handed to the view.
pub type View = [[Symbol; GRID]; GRID];

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// All water.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Water; GRID]; GRID],
        }
    }

    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        row < GRID && col < GRID
    }

    /// `true` iff the cell is open water. Off-board positions are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Water)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// `true` if a shot already landed at `target`.
    pub fn is_resolved(&self, target: Coordinate) -> bool {
        self.cell(target.row, target.col)
            .map(Cell::is_resolved)
            .unwrap_or(false)
    }

    /// Place `ship` with its upper-left cell at (`row`, `col`).
    pub fn place(
        &mut self,
        ship: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Placement, PlacementError> {
        let placement = Placement::new(ship, orientation, row, col)?;
        if placement.cells().any(|c| !self.is_empty(c.row, c.col)) {
            return Err(PlacementError::Overlap);
        }
        for c in placement.cells() {
            self.cells[c.row][c.col] = Cell::Ship(ship.id());
        }
        debug!("placed {} at {} {:?}", ship, placement.origin(), orientation);
        Ok(placement)
    }

    /// Rejection-sample an orientation and origin until `ship` fits.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(usize, usize, Orientation), GameError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let r = rng.random_range(0..GRID);
            let c = rng.random_range(0..GRID);
            let Ok(candidate) = Placement::new(ship, orient, r, c) else {
                continue;
            };
            if candidate.cells().all(|cell| self.is_empty(cell.row, cell.col)) {
                return Ok((r, c, orient));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// Resolve a shot at (`row`, `col`) against this board and the
    /// defender's `fleet`.
    ///
    /// Already resolved and off-board targets report `Miss` without any
    /// state change.
    pub fn fire(&mut self, row: usize, col: usize, fleet: &mut Fleet) -> HitResult {
        let Some(cell) = self.cell(row, col) else {
            warn!("shot at ({}, {}) is off the board", row, col);
            return HitResult::Miss;
        };
        match cell {
            Cell::Ship(id) => {
                self.cells[row][col] = Cell::Hit;
                if fleet.decrement(id) == 0 {
                    HitResult::Sunk
                } else {
                    HitResult::Hit
                }
            }
            Cell::Water => {
                self.cells[row][col] = Cell::Miss;
                HitResult::Miss
            }
            Cell::Hit | Cell::Miss => {
                debug!("({}, {}) already targeted", row, col);
                HitResult::Miss
            }
        }
    }

    /// Fire at a coordinate given as text. Malformed text is a `Miss`.
    pub fn fire_at(&mut self, target: &str, fleet: &mut Fleet) -> HitResult {
        match parse_coordinate(target) {
            Ok(c) => self.fire(c.row, c.col, fleet),
            Err(e) => {
                warn!("ignoring shot at {:?}: {}", target, e);
                HitResult::Miss
            }
        }
    }

    /// Strike every cell of `row`. Returns the number of ship cells hit.
    ///
    /// Fleet counters are left alone, so an airstrike never reports a sink;
    /// `is_game_over` still sees the cleared cells.
    pub fn perform_airstrike(&mut self, row: usize) -> usize {
        let Some(cells) = self.cells.get_mut(row) else {
            warn!("airstrike on row {} is off the board", row);
            return 0;
        };
        let mut hits = 0;
        for cell in cells.iter_mut() {
            match *cell {
                Cell::Ship(_) => {
                    *cell = Cell::Hit;
                    hits += 1;
                }
                Cell::Water => *cell = Cell::Miss,
                Cell::Hit | Cell::Miss => {}
            }
        }
        debug!("airstrike on row {} hit {} cells", row + 1, hits);
        hits
    }

    /// `true` when no ship cell is left anywhere.
    pub fn is_game_over(&self) -> bool {
        self.ship_cells().next().is_none()
    }

    /// Unhit ship cells in row-major order.
    pub fn ship_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, c)| matches!(c, Cell::Ship(_)))
                .map(move |(col, _)| Coordinate { row, col })
        })
    }

    /// Number of unhit ship cells in `row`.
    pub fn ship_cells_in_row(&self, row: usize) -> usize {
        self.cells
            .get(row)
            .map(|r| r.iter().filter(|c| matches!(c, Cell::Ship(_))).count())
            .unwrap_or(0)
    }

    /// Symbol for one cell; ships are shown only when `reveal` is set.
    pub fn symbol_at(&self, row: usize, col: usize, reveal: bool) -> Symbol {
        match self.cell(row, col) {
            Some(Cell::Ship(_)) if reveal => Symbol::Ship,
            Some(Cell::Hit) => Symbol::Hit,
            Some(Cell::Miss) => Symbol::Miss,
            _ => Symbol::Open,
        }
    }

    /// The owner's view: ships visible.
    pub fn own_view(&self) -> View {
        core::array::from_fn(|r| core::array::from_fn(|c| self.symbol_at(r, c, true)))
    }

    /// The opponent's view: ships masked as open water.
    pub fn opponent_view(&self) -> View {
        core::array::from_fn(|r| core::array::from_fn(|c| self.symbol_at(r, c, false)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.own_view().iter() {
            write!(f, "  ")?;
            for sym in row.iter() {
                write!(f, "{} ", sym)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
