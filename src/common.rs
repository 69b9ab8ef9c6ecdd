//! Common types for the engine: shot results and the error taxonomy.

use core::fmt;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    /// Open water, an already resolved cell, or an invalid target.
    Miss,
    /// A ship segment was hit and the ship still floats.
    Hit,
    /// The last remaining segment of a ship was hit.
    Sunk,
}

impl HitResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, HitResult::Miss)
    }
}

/// Reasons `Board::place` can reject a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Origin or part of the run lies outside the board.
    OutOfBounds,
    /// A covered cell is not open water.
    Overlap,
    /// Ship id or length is not usable on this board.
    InvalidShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship will go out of bounds"),
            PlacementError::Overlap => write!(f, "Ship overlaps with another ship"),
            PlacementError::InvalidShip => write!(f, "Ship does not exist in this fleet"),
        }
    }
}

/// Recoverable input problems. Every variant is answered by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Text does not match `[A-J](10|[1-9])`.
    MalformedCoordinate,
    /// A row, column or ship run falls outside the board.
    OutOfBounds,
    /// Placement overlaps an existing ship.
    Overlap,
    /// Menu entry outside the offered choices.
    InvalidMenuChoice,
    /// Fleet size outside 1..=5.
    InvalidShipCount,
    /// Orientation other than `h` or `v`.
    InvalidOrientation,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MalformedCoordinate => {
                write!(f, "Invalid coordinate! Please enter a valid coordinate (e.g., A5 or A10)")
            }
            InputError::OutOfBounds => write!(f, "Out of bounds"),
            InputError::Overlap => write!(f, "Ship overlaps with another ship"),
            InputError::InvalidMenuChoice => write!(f, "Invalid choice"),
            InputError::InvalidShipCount => write!(f, "Invalid number of ships (choose 1-5)"),
            InputError::InvalidOrientation => write!(f, "Enter 'h' for horizontal or 'v' for vertical"),
        }
    }
}

impl From<PlacementError> for InputError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::OutOfBounds | PlacementError::InvalidShip => InputError::OutOfBounds,
            PlacementError::Overlap => InputError::Overlap,
        }
    }
}

/// Conditions that stop a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// An input error escaped a component that cannot re-prompt.
    Input(InputError),
    /// The input collaborator has no more answers.
    InputClosed,
    /// A player could not produce a shot.
    NoTarget,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Operation not allowed in the current phase.
    InvalidPhase,
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        GameError::Input(err)
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Input(err.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Input(e) => write!(f, "Input error: {}", e),
            GameError::InputClosed => write!(f, "Input stream closed"),
            GameError::NoTarget => write!(f, "No target available"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::InvalidPhase => write!(f, "Operation not allowed in the current phase"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
