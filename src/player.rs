use log::debug;
use rand::rngs::SmallRng;

use crate::{
    ai::{place_fleet_randomly, Difficulty, Strategy, TargetingStrategy},
    board::Board,
    common::{GameError, HitResult},
    config::MAX_SHIPS,
    coord::Coordinate,
    fleet::Fleet,
    session::GameView,
    turn::PlayerId,
};

/// Interface implemented by the controller of one seat, human or AI.
pub trait Player {
    /// Short label used in banners and logs.
    fn name(&self) -> &str;

    /// Number of ships to play with. `opponent` is the size the other seat
    /// already chose, if any.
    fn choose_fleet_size(&mut self, opponent: Option<usize>) -> Result<usize, GameError>;

    /// Place every ship of `fleet` onto `board`.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
        seat: PlayerId,
        view: &mut dyn GameView,
    ) -> Result<(), GameError>;

    /// Choose the next target on the opponent's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, GameError>;

    /// Choose the zero-based row for an earned airstrike.
    fn select_airstrike_row(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<usize, GameError>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _target: Coordinate, _result: HitResult) {}

    /// Inform the player that its airstrike on `row` landed `hits` hits.
    fn handle_airstrike(&mut self, _row: usize, _hits: usize) {}
}

/// Computer player driven by a targeting strategy.
pub struct AiPlayer {
    strategy: Strategy,
    fleet_size: Option<usize>,
}

impl AiPlayer {
    /// AI that mirrors the opponent's fleet size.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            strategy: Strategy::new(difficulty),
            fleet_size: None,
        }
    }

    /// AI that always plays with `ships` ships.
    pub fn with_fleet_size(difficulty: Difficulty, ships: usize) -> Self {
        Self {
            strategy: Strategy::new(difficulty),
            fleet_size: Some(ships),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        match self.strategy.difficulty() {
            Difficulty::Easy => "AI (easy)",
            Difficulty::Medium => "AI (medium)",
            Difficulty::Hard => "AI (hard)",
        }
    }

    fn choose_fleet_size(&mut self, opponent: Option<usize>) -> Result<usize, GameError> {
        let size = self.fleet_size.or(opponent).unwrap_or(MAX_SHIPS);
        Fleet::new(size)?;
        Ok(size)
    }

    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
        _seat: PlayerId,
        _view: &mut dyn GameView,
    ) -> Result<(), GameError> {
        place_fleet_randomly(rng, board, fleet)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, GameError> {
        let target = self
            .strategy
            .next_shot(rng, opponent)
            .ok_or(GameError::NoTarget)?;
        debug!("{} fires at {}", self.name(), target);
        Ok(target)
    }

    fn select_airstrike_row(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<usize, GameError> {
        Ok(self.strategy.airstrike_row(rng, opponent))
    }

    fn handle_guess_result(&mut self, target: Coordinate, result: HitResult) {
        self.strategy.observe(target, result);
    }

    fn handle_airstrike(&mut self, row: usize, _hits: usize) {
        self.strategy.observe_airstrike(row);
    }
}
