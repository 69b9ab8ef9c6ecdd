//! Game session: setup of both seats, the turn loop, the consecutive-hit
//! airstrike bonus and game-over detection.

use core::fmt;
use core::str::FromStr;

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    ai::Difficulty,
    board::{Board, View},
    common::{GameError, HitResult, InputError},
    config::{AIRSTRIKE_THRESHOLD, GRID},
    coord::Coordinate,
    fleet::Fleet,
    player::Player,
    turn::{PlayerId, TurnCoordinator, TurnHandoff},
};

/// Who sits at the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi(Difficulty),
}

/// Startup menu entry: `1` for two humans, `2` for a game against the AI.
/// The AI difficulty is chosen in a second menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    PlayerVsPlayer,
    PlayerVsAi,
}

impl FromStr for ModeChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ModeChoice::PlayerVsPlayer),
            "2" => Ok(ModeChoice::PlayerVsAi),
            _ => Err(InputError::InvalidMenuChoice),
        }
    }
}

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup(PlayerId),
    Playing,
    GameOver(PlayerId),
}

/// Things the view is told about as they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `player` fired at `target` with `result`.
    Shot {
        player: PlayerId,
        target: Coordinate,
        result: HitResult,
    },
    /// The target had already been resolved; the shot is wasted.
    AlreadyTargeted { player: PlayerId, target: Coordinate },
    AirstrikeEarned { player: PlayerId },
    /// Zero-based `row` was struck, hitting `hits` ship cells.
    Airstrike {
        player: PlayerId,
        row: usize,
        hits: usize,
    },
    GameOver { winner: PlayerId },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Shot { result, .. } => match result {
                HitResult::Miss => write!(f, "MISS"),
                HitResult::Hit => write!(f, "HIT"),
                HitResult::Sunk => write!(f, "SUNK BATTLESHIP"),
            },
            GameEvent::AlreadyTargeted { target, .. } => {
                write!(f, "{} was already targeted", target)
            }
            GameEvent::AirstrikeEarned { .. } => {
                write!(f, "You have earned an airstrike! Choose a row (1-10) to fire at.")
            }
            GameEvent::Airstrike { row, hits, .. } => {
                write!(f, "Airstrike hit {} times on row {}.", hits, row + 1)
            }
            GameEvent::GameOver { winner } => write!(f, "GAME OVER: {} wins!", winner),
        }
    }
}

/// Rendering collaborator. Every method defaults to doing nothing.
pub trait GameView: TurnHandoff {
    /// Show the symbol legend.
    fn symbol_key(&mut self) {}
    /// Show `player`'s own board with ships revealed.
    fn show_own_board(&mut self, _player: PlayerId, _view: &View) {}
    /// Show the board of `player`'s opponent with ships masked.
    fn show_opponent_board(&mut self, _player: PlayerId, _view: &View) {}
    fn event(&mut self, _event: GameEvent) {}
}

/// View that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl TurnHandoff for NullView {}
impl GameView for NullView {}

/// Per-player state owned by the session.
#[derive(Debug, Clone, Default)]
struct Seat {
    board: Board,
    fleet: Option<Fleet>,
    hit_streak: u32,
}

/// Two boards, two fleets and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameSession {
    seats: [Seat; 2],
    turns: TurnCoordinator,
    phase: Phase,
    turns_played: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            seats: Default::default(),
            turns: TurnCoordinator::new(),
            phase: Phase::Setup(PlayerId::One),
            turns_played: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.seats[player.index()].board
    }

    pub fn fleet(&self, player: PlayerId) -> Option<&Fleet> {
        self.seats[player.index()].fleet.as_ref()
    }

    /// Consecutive hits counted toward the next airstrike.
    pub fn hit_streak(&self, player: PlayerId) -> u32 {
        self.seats[player.index()].hit_streak
    }

    /// Completed play-phase turns, both seats together.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Set up both seats, then play until someone wins.
    pub fn run(
        &mut self,
        players: [&mut dyn Player; 2],
        rng: &mut SmallRng,
        view: &mut dyn GameView,
    ) -> Result<PlayerId, GameError> {
        let [first, second] = players;
        self.setup(first, rng, view)?;
        self.setup(second, rng, view)?;
        let mut seats: [&mut dyn Player; 2] = [first, second];
        loop {
            if let Phase::GameOver(winner) = self.phase {
                return Ok(winner);
            }
            let active = self.turns.current();
            self.take_turn(&mut *seats[active.index()], rng, view)?;
        }
    }

    /// Setup phase for the seat named by `Phase::Setup`.
    pub fn setup(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
        view: &mut dyn GameView,
    ) -> Result<(), GameError> {
        let Phase::Setup(seat) = self.phase else {
            return Err(GameError::InvalidPhase);
        };
        debug_assert_eq!(seat, self.turns.current());
        self.turns.begin_turn(view);
        view.symbol_key();

        let opponent_size = self.seats[seat.other().index()].fleet.map(|f| f.count());
        let fleet = Fleet::new(player.choose_fleet_size(opponent_size)?)?;

        let slot = &mut self.seats[seat.index()];
        view.show_own_board(seat, &slot.board.own_view());
        player.place_ships(rng, &mut slot.board, &fleet, seat, view)?;
        slot.fleet = Some(fleet);
        view.show_own_board(seat, &slot.board.own_view());
        info!("{} ({}) placed {} ships", seat, player.name(), fleet.count());

        self.turns.end_turn(view);
        self.phase = match seat {
            PlayerId::One => Phase::Setup(PlayerId::Two),
            PlayerId::Two => Phase::Playing,
        };
        Ok(())
    }

    /// Play one turn for the active seat. Every shot result ends the turn;
    /// a game-ending shot leaves the active seat in place as the winner.
    pub fn take_turn(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
        view: &mut dyn GameView,
    ) -> Result<Phase, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::InvalidPhase);
        }
        let active = self.turns.current();
        let opponent = active.other();
        self.turns.begin_turn(view);
        view.show_own_board(active, &self.board(active).own_view());
        view.show_opponent_board(active, &self.board(opponent).opponent_view());

        let target = player.select_target(rng, self.board(opponent))?;
        let result = self.fire(active, target, view)?;
        player.handle_guess_result(target, result);

        if result.is_hit() {
            self.seats[active.index()].hit_streak += 1;
            if self.hit_streak(active) >= AIRSTRIKE_THRESHOLD {
                self.airstrike(player, rng, view)?;
            }
            if self.board(opponent).is_game_over() {
                self.finish(active, view);
            }
        }

        self.turns_played += 1;
        if self.phase == Phase::Playing {
            self.turns.end_turn(view);
        }
        Ok(self.phase)
    }

    fn fire(
        &mut self,
        active: PlayerId,
        target: Coordinate,
        view: &mut dyn GameView,
    ) -> Result<HitResult, GameError> {
        let defender = &mut self.seats[active.other().index()];
        let fleet = defender.fleet.as_mut().ok_or(GameError::InvalidPhase)?;
        if defender.board.is_resolved(target) {
            view.event(GameEvent::AlreadyTargeted {
                player: active,
                target,
            });
        }
        let result = defender.board.fire(target.row, target.col, fleet);
        debug!("{} fired at {}: {:?}", active, target, result);
        view.event(GameEvent::Shot {
            player: active,
            target,
            result,
        });
        Ok(result)
    }

    /// Resolve an earned airstrike for the active seat and reset its streak.
    /// Returns `true` if the strike cleared the opponent's last ship cell.
    ///
    /// Only allowed while playing. Without a full hit streak nothing happens.
    /// A row off the board is wasted: no cell changes and the streak resets.
    pub fn airstrike(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
        view: &mut dyn GameView,
    ) -> Result<bool, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::InvalidPhase);
        }
        let active = self.turns.current();
        let opponent = active.other();
        if self.hit_streak(active) < AIRSTRIKE_THRESHOLD {
            debug!("{} has not earned an airstrike", active);
            return Ok(false);
        }
        view.event(GameEvent::AirstrikeEarned { player: active });

        let row = player.select_airstrike_row(rng, self.board(opponent))?;
        if row >= GRID {
            warn!("{} airstrike on row index {} is off the board", active, row);
            self.seats[active.index()].hit_streak = 0;
            return Ok(false);
        }
        let hits = self.seats[opponent.index()].board.perform_airstrike(row);
        player.handle_airstrike(row, hits);
        view.event(GameEvent::Airstrike {
            player: active,
            row,
            hits,
        });
        view.show_opponent_board(active, &self.board(opponent).opponent_view());
        self.seats[active.index()].hit_streak = 0;
        info!("{} airstrike on row {}: {} hits", active, row + 1, hits);

        let over = self.board(opponent).is_game_over();
        if over {
            self.finish(active, view);
        }
        Ok(over)
    }

    fn finish(&mut self, winner: PlayerId, view: &mut dyn GameView) {
        if self.phase == Phase::Playing {
            info!("game over: {} wins", winner);
            self.phase = Phase::GameOver(winner);
            view.event(GameEvent::GameOver { winner });
        }
    }
}
