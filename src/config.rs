pub const BOARD_SIZE: u8 = 10;
/// Largest fleet a player may choose. Ship `i` has length `i`.
pub const MAX_SHIPS: usize = 5;
pub const MIN_SHIPS: usize = 1;
/// Consecutive hits needed to earn an airstrike.
pub const AIRSTRIKE_THRESHOLD: u32 = 3;

/// Attempts made by random placement before giving up on a ship.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

pub const GRID: usize = BOARD_SIZE as usize;
