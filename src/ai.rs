// Targeting policies for computer-controlled players.
// Uses no_std and avoids heap allocations.

use core::fmt;
use core::str::FromStr;

use log::debug;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    board::Board,
    common::{GameError, HitResult, InputError},
    config::GRID,
    coord::Coordinate,
    fleet::Fleet,
};

/// Set of coordinates a strategy has already fired at.
type Targeted = BitBoard<u128, GRID>;

/// AI tier, chosen once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = InputError;

    /// Accepts the menu numbers `1`-`3` or the tier names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Difficulty::Easy),
            "2" => Ok(Difficulty::Medium),
            "3" => Ok(Difficulty::Hard),
            other if other.eq_ignore_ascii_case("easy") => Ok(Difficulty::Easy),
            other if other.eq_ignore_ascii_case("medium") => Ok(Difficulty::Medium),
            other if other.eq_ignore_ascii_case("hard") => Ok(Difficulty::Hard),
            _ => Err(InputError::InvalidMenuChoice),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Cardinal probing direction used while in target mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Target-mode bookkeeping for the medium strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetState {
    pub target_mode: bool,
    /// First hit of the ship being chased; rays start here.
    pub initial_hit: Option<Coordinate>,
    pub direction: Option<Direction>,
    pub steps: usize,
    directions_tried: u8,
}

impl TargetState {
    pub fn has_tried(&self, dir: Direction) -> bool {
        self.directions_tried & dir.bit() != 0
    }

    /// Drop all target-mode state and go back to hunting.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn abandon_direction(&mut self) {
        self.direction = None;
        self.steps = 0;
    }
}

/// A way of choosing shots against an opponent board.
pub trait TargetingStrategy {
    /// Pick the next coordinate to fire at.
    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> Option<Coordinate>;

    /// Learn the outcome of the last shot.
    fn observe(&mut self, _target: Coordinate, _result: HitResult) {}

    /// Row to strike when an airstrike is earned. Defaults to a random row.
    fn airstrike_row<R: Rng + ?Sized>(&mut self, rng: &mut R, _board: &Board) -> usize {
        rng.random_range(0..GRID)
    }

    /// Learn that a whole row was struck.
    fn observe_airstrike(&mut self, _row: usize) {}
}

/// Uniformly sample an untargeted cell and record it.
fn hunt<R: Rng + ?Sized>(rng: &mut R, targeted: &mut Targeted) -> Option<Coordinate> {
    if targeted.is_full() {
        return None;
    }
    let open = GRID * GRID - targeted.count_ones();
    let pick = rng.random_range(0..open);
    let (row, col) = targeted.iter_clear_bits().nth(pick)?;
    targeted.set(row, col).ok()?;
    Some(Coordinate { row, col })
}

/// Fires at random cells it has not tried yet.
#[derive(Debug, Clone, Default)]
pub struct EasyAi {
    targeted: Targeted,
}

impl EasyAi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetingStrategy for EasyAi {
    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, _board: &Board) -> Option<Coordinate> {
        hunt(rng, &mut self.targeted)
    }

    fn observe_airstrike(&mut self, row: usize) {
        let _ = self.targeted.set_row(row);
    }
}

/// Hunts at random; after a hit, walks rays out from the first hit.
#[derive(Debug, Clone, Default)]
pub struct MediumAi {
    targeted: Targeted,
    state: TargetState,
}

impl MediumAi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TargetState {
        &self.state
    }

    pub fn has_targeted(&self, c: Coordinate) -> bool {
        self.targeted.get(c.row, c.col).unwrap_or(false)
    }

    fn pick_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Direction> {
        let mut open = [Direction::Up; 4];
        let mut n = 0;
        for dir in Direction::ALL {
            if !self.state.has_tried(dir) {
                open[n] = dir;
                n += 1;
            }
        }
        if n == 0 {
            return None;
        }
        let dir = open[rng.random_range(0..n)];
        self.state.directions_tried |= dir.bit();
        Some(dir)
    }
}

impl TargetingStrategy for MediumAi {
    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, _board: &Board) -> Option<Coordinate> {
        loop {
            let origin = match (self.state.target_mode, self.state.initial_hit) {
                (true, Some(origin)) => origin,
                _ => {
                    self.state.reset();
                    return hunt(rng, &mut self.targeted);
                }
            };
            let dir = match self.state.direction {
                Some(dir) => {
                    self.state.steps += 1;
                    dir
                }
                None => match self.pick_direction(rng) {
                    Some(dir) => {
                        self.state.direction = Some(dir);
                        self.state.steps = 1;
                        dir
                    }
                    None => {
                        debug!("all directions from {} exhausted", origin);
                        self.state.reset();
                        continue;
                    }
                },
            };
            let (dr, dc) = dir.delta();
            match origin.offset(dr, dc, self.state.steps) {
                Some(next) if !self.has_targeted(next) => {
                    let _ = self.targeted.set(next.row, next.col);
                    return Some(next);
                }
                _ => self.state.abandon_direction(),
            }
        }
    }

    fn observe(&mut self, target: Coordinate, result: HitResult) {
        match result {
            HitResult::Miss => {
                if self.state.target_mode {
                    self.state.abandon_direction();
                }
            }
            HitResult::Hit => {
                if !self.state.target_mode {
                    self.state.reset();
                    self.state.target_mode = true;
                    self.state.initial_hit = Some(target);
                }
            }
            HitResult::Sunk => self.state.reset(),
        }
    }

    fn observe_airstrike(&mut self, row: usize) {
        let _ = self.targeted.set_row(row);
    }
}

/// Knows where every ship is and always fires at one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardAi;

impl TargetingStrategy for HardAi {
    fn next_shot<R: Rng + ?Sized>(&mut self, _rng: &mut R, board: &Board) -> Option<Coordinate> {
        board.ship_cells().next()
    }

    /// The row holding the most ship cells; the first such row on ties.
    fn airstrike_row<R: Rng + ?Sized>(&mut self, _rng: &mut R, board: &Board) -> usize {
        (0..GRID)
            .rev()
            .max_by_key(|&row| board.ship_cells_in_row(row))
            .unwrap_or(0)
    }
}

/// One strategy per difficulty.
#[derive(Debug, Clone)]
pub enum Strategy {
    Easy(EasyAi),
    Medium(MediumAi),
    Hard(HardAi),
}

impl Strategy {
    pub fn new(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Easy(EasyAi::new()),
            Difficulty::Medium => Strategy::Medium(MediumAi::new()),
            Difficulty::Hard => Strategy::Hard(HardAi),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Easy(_) => Difficulty::Easy,
            Strategy::Medium(_) => Difficulty::Medium,
            Strategy::Hard(_) => Difficulty::Hard,
        }
    }
}

impl TargetingStrategy for Strategy {
    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> Option<Coordinate> {
        match self {
            Strategy::Easy(s) => s.next_shot(rng, board),
            Strategy::Medium(s) => s.next_shot(rng, board),
            Strategy::Hard(s) => s.next_shot(rng, board),
        }
    }

    fn observe(&mut self, target: Coordinate, result: HitResult) {
        match self {
            Strategy::Easy(s) => s.observe(target, result),
            Strategy::Medium(s) => s.observe(target, result),
            Strategy::Hard(s) => s.observe(target, result),
        }
    }

    fn airstrike_row<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> usize {
        match self {
            Strategy::Easy(s) => s.airstrike_row(rng, board),
            Strategy::Medium(s) => s.airstrike_row(rng, board),
            Strategy::Hard(s) => s.airstrike_row(rng, board),
        }
    }

    fn observe_airstrike(&mut self, row: usize) {
        match self {
            Strategy::Easy(s) => s.observe_airstrike(row),
            Strategy::Medium(s) => s.observe_airstrike(row),
            Strategy::Hard(s) => s.observe_airstrike(row),
        }
    }
}

/// Place every ship of `fleet` at a random legal position.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &Fleet,
) -> Result<(), GameError> {
    for ship in fleet.ship_types() {
        let (r, c, o) = board.random_placement(rng, ship)?;
        board.place(ship, r, c, o)?;
    }
    Ok(())
}
