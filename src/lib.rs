#![cfg_attr(not(feature = "std"), no_std)]

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
pub mod human;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod session;
mod ship;
#[cfg(feature = "std")]
pub mod terminal;
mod turn;

pub use ai::{
    place_fleet_randomly, Difficulty, Direction, EasyAi, HardAi, MediumAi, Strategy,
    TargetState, TargetingStrategy,
};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use human::{HumanPlayer, InputProvider, ScriptedInput};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use session::{GameEvent, GameMode, GameSession, GameView, ModeChoice, NullView, Phase};
pub use ship::*;
#[cfg(feature = "std")]
pub use terminal::{StdinInput, TerminalView};
pub use turn::*;
