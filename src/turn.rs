//! Active-player tracking and turn handoff.

use core::fmt;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Index into per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2, as shown to players.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Hooks called at each turn boundary, e.g. to ask for the device to be
/// handed over.
pub trait TurnHandoff {
    fn begin_turn(&mut self, _player: PlayerId) {}
    fn end_turn(&mut self, _player: PlayerId) {}
}

/// Two-state toggle between the seats. Player one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCoordinator {
    current: PlayerId,
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnCoordinator {
    pub fn new() -> Self {
        Self {
            current: PlayerId::One,
        }
    }

    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn begin_turn<H: TurnHandoff + ?Sized>(&self, handoff: &mut H) {
        handoff.begin_turn(self.current);
    }

    /// Announce the end of the current turn, then switch seats.
    pub fn end_turn<H: TurnHandoff + ?Sized>(&mut self, handoff: &mut H) {
        handoff.end_turn(self.current);
        self.current = self.current.other();
    }
}
