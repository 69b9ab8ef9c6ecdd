#![cfg(feature = "std")]

//! Human-controlled seats and the startup menus.
//!
//! All prompting goes through [`InputProvider`], so the same code runs
//! against a terminal or a scripted list of answers. Every rejected answer
//! is reported through [`InputProvider::notify`] and the prompt repeats.

use std::collections::VecDeque;
use std::str::FromStr;

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    ai::Difficulty,
    board::Board,
    common::{GameError, InputError},
    config::GRID,
    coord::Coordinate,
    fleet::Fleet,
    player::Player,
    session::{GameMode, GameView, ModeChoice},
    ship::Orientation,
    turn::PlayerId,
};

/// Source of answers for a human player.
pub trait InputProvider {
    /// Show `prompt` and return the next answer, or `None` once input ends.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Tell the player why the last answer was rejected.
    fn notify(&mut self, _message: &str) {}
}

impl<I: InputProvider + ?Sized> InputProvider for &mut I {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        (**self).read_line(prompt)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// Answers from a fixed list, recording every notice it receives.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    notices: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            notices: Vec::new(),
        }
    }

    /// Rejection messages seen so far.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.pop_front()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Prompt until the answer parses as `T`.
pub fn prompt_parsed<T, I>(input: &mut I, prompt: &str) -> Result<T, GameError>
where
    T: FromStr<Err = InputError>,
    I: InputProvider + ?Sized,
{
    loop {
        let line = input.read_line(prompt).ok_or(GameError::InputClosed)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("rejected {:?}: {}", line.trim(), e);
                input.notify(&e.to_string());
            }
        }
    }
}

/// Prompt until a well-formed coordinate is entered.
pub fn request_coordinate<I>(input: &mut I, prompt: &str) -> Result<Coordinate, GameError>
where
    I: InputProvider + ?Sized,
{
    prompt_parsed(input, prompt)
}

/// Startup menu: `1` player vs player, `2` player vs AI (then difficulty).
pub fn choose_mode<I>(input: &mut I) -> Result<GameMode, GameError>
where
    I: InputProvider + ?Sized,
{
    match prompt_parsed::<ModeChoice, _>(input, "Enter your choice (1 or 2): ")? {
        ModeChoice::PlayerVsPlayer => Ok(GameMode::PlayerVsPlayer),
        ModeChoice::PlayerVsAi => Ok(GameMode::PlayerVsAi(choose_difficulty(input)?)),
    }
}

/// Difficulty menu: `1` easy, `2` medium, `3` hard.
pub fn choose_difficulty<I>(input: &mut I) -> Result<Difficulty, GameError>
where
    I: InputProvider + ?Sized,
{
    prompt_parsed(input, "Enter your choice (1, 2, or 3): ")
}

/// Fleet size typed by a human; validated against 1..=5.
struct FleetSize(usize);

impl FromStr for FleetSize {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.parse().map_err(|_| InputError::InvalidShipCount)?;
        Fleet::new(n).map(|f| FleetSize(f.count()))
    }
}

/// Airstrike row typed as 1..=10.
struct AirstrikeRow(usize);

impl FromStr for AirstrikeRow {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(n) if (1..=GRID).contains(&n) => Ok(AirstrikeRow(n - 1)),
            _ => Err(InputError::OutOfBounds),
        }
    }
}

/// A seat controlled through an input provider.
pub struct HumanPlayer<I> {
    name: String,
    input: I,
}

impl<I: InputProvider> HumanPlayer<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: InputProvider> Player for HumanPlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_fleet_size(&mut self, _opponent: Option<usize>) -> Result<usize, GameError> {
        let FleetSize(n) =
            prompt_parsed(&mut self.input, "Choose the number of ships for your board (1-5): ")?;
        Ok(n)
    }

    fn place_ships(
        &mut self,
        _rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
        seat: PlayerId,
        view: &mut dyn GameView,
    ) -> Result<(), GameError> {
        for ship in fleet.ship_types() {
            loop {
                let orientation: Orientation = prompt_parsed(
                    &mut self.input,
                    &format!(
                        "Place {}. Enter 'h' for horizontal or 'v' for vertical: ",
                        ship
                    ),
                )?;
                let origin = request_coordinate(
                    &mut self.input,
                    "Enter the upper leftmost coordinate for your ship (e.g., A1): ",
                )?;
                match board.place(ship, origin.row, origin.col, orientation) {
                    Ok(_) => {
                        view.show_own_board(seat, &board.own_view());
                        break;
                    }
                    Err(e) => {
                        self.input
                            .notify(&format!("{}. Invalid placement. Please try again.", e));
                    }
                }
            }
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> Result<Coordinate, GameError> {
        request_coordinate(
            &mut self.input,
            "Input the coordinate you want to fire at (e.g., A5 or A10): ",
        )
    }

    fn select_airstrike_row(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> Result<usize, GameError> {
        let AirstrikeRow(row) =
            prompt_parsed(&mut self.input, "Enter row number (1-10) for airstrike: ")?;
        Ok(row)
    }
}
