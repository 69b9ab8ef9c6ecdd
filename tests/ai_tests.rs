use std::collections::HashSet;

use broadside::{
    Board, Cell, Coordinate, Direction, EasyAi, Fleet, HardAi, HitResult, MediumAi, Orientation,
    ShipType, Strategy, TargetState, TargetingStrategy, Difficulty,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coord(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_easy_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = Board::new();
    let mut ai = EasyAi::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let c = ai.next_shot(&mut rng, &board).unwrap();
        assert!(seen.insert(c), "{} fired twice", c);
    }
    assert_eq!(ai.next_shot(&mut rng, &board), None);
}

#[test]
fn test_easy_skips_airstruck_row() {
    let mut rng = SmallRng::seed_from_u64(8);
    let board = Board::new();
    let mut ai = EasyAi::new();
    ai.observe_airstrike(3);
    for _ in 0..90 {
        assert_ne!(ai.next_shot(&mut rng, &board).unwrap().row, 3);
    }
    assert_eq!(ai.next_shot(&mut rng, &board), None);
}

#[test]
fn test_hard_always_hits_until_board_clear() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    let mut fleet = Fleet::new(5).unwrap();
    broadside::place_fleet_randomly(&mut rng, &mut board, &fleet).unwrap();

    let mut ai = HardAi;
    let mut shots = 0;
    while let Some(target) = ai.next_shot(&mut rng, &board) {
        assert!(matches!(board.cell(target.row, target.col), Some(Cell::Ship(_))));
        assert!(board.fire(target.row, target.col, &mut fleet).is_hit());
        shots += 1;
    }
    assert_eq!(shots, 15);
    assert!(board.is_game_over());
}

#[test]
fn test_hard_scans_row_major() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    board.place(ShipType::new(2), 6, 3, Orientation::Vertical).unwrap();
    board.place(ShipType::new(1), 6, 8, Orientation::Vertical).unwrap();
    assert_eq!(HardAi.next_shot(&mut rng, &board), Some(coord(6, 3)));
}

#[test]
fn test_hard_airstrikes_fullest_row() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    board.place(ShipType::new(2), 1, 0, Orientation::Horizontal).unwrap();
    board.place(ShipType::new(4), 7, 2, Orientation::Horizontal).unwrap();
    board.place(ShipType::new(3), 4, 9, Orientation::Vertical).unwrap();
    assert_eq!(HardAi.airstrike_row(&mut rng, &board), 7);
}

#[test]
fn test_medium_hunts_until_hit() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = Board::new();
    let mut ai = MediumAi::new();
    let first = ai.next_shot(&mut rng, &board).unwrap();
    ai.observe(first, HitResult::Miss);
    // a miss while hunting leaves no target-mode state behind
    assert_eq!(*ai.state(), TargetState::default());

    let hit = ai.next_shot(&mut rng, &board).unwrap();
    ai.observe(hit, HitResult::Hit);
    let state = ai.state();
    assert!(state.target_mode);
    assert_eq!(state.initial_hit, Some(hit));
    assert_eq!(state.direction, None);
    assert!(Direction::ALL.iter().all(|d| !state.has_tried(*d)));
}

#[test]
fn test_medium_exhausts_corner_then_hunts() {
    let mut rng = SmallRng::seed_from_u64(11);
    let board = Board::new();
    let mut ai = MediumAi::new();
    let corner = coord(0, 0);
    ai.observe(corner, HitResult::Hit);

    let mut shots = Vec::new();
    for _ in 0..2 {
        let c = ai.next_shot(&mut rng, &board).unwrap();
        assert!(ai.state().target_mode);
        shots.push(c);
        ai.observe(c, HitResult::Miss);
    }
    shots.sort();
    assert_eq!(shots, vec![coord(0, 1), coord(1, 0)]);

    // up and left leave the board, so the next pick falls back to hunting
    let _ = ai.next_shot(&mut rng, &board).unwrap();
    assert!(!ai.state().target_mode);
    assert_eq!(ai.state().initial_hit, None);
}

#[test]
fn test_medium_resets_on_sunk() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = Board::new();
    let mut ai = MediumAi::new();
    ai.observe(coord(5, 5), HitResult::Hit);
    let next = ai.next_shot(&mut rng, &board).unwrap();
    ai.observe(next, HitResult::Sunk);
    assert_eq!(*ai.state(), Default::default());
}

#[test]
fn test_medium_keeps_direction_after_hit() {
    let mut rng = SmallRng::seed_from_u64(9);
    let board = Board::new();
    let mut ai = MediumAi::new();
    let origin = coord(5, 5);
    ai.observe(origin, HitResult::Hit);

    let first = ai.next_shot(&mut rng, &board).unwrap();
    let dir = ai.state().direction.unwrap();
    ai.observe(first, HitResult::Hit);
    let second = ai.next_shot(&mut rng, &board).unwrap();
    let (dr, dc) = dir.delta();
    assert_eq!(Some(first), origin.offset(dr, dc, 1));
    assert_eq!(Some(second), origin.offset(dr, dc, 2));
    assert_eq!(ai.state().initial_hit, Some(origin));
}

#[test]
fn test_strategy_dispatch() {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(Strategy::new(d).difficulty(), d);
    }
    assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("4".parse::<Difficulty>().is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every target-mode shot lies on the ray from the first hit along the
    /// current direction, at the current step count.
    #[test]
    fn medium_shots_stay_on_ray(
        seed in any::<u64>(),
        row in 0usize..10,
        col in 0usize..10,
        outcomes in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new();
        let mut ai = MediumAi::new();
        let origin = coord(row, col);
        ai.observe(origin, HitResult::Hit);

        for hit in outcomes {
            let shot = ai.next_shot(&mut rng, &board).unwrap();
            let state = *ai.state();
            if !state.target_mode {
                break;
            }
            prop_assert_eq!(state.initial_hit, Some(origin));
            let (dr, dc) = state.direction.unwrap().delta();
            prop_assert_eq!(Some(shot), origin.offset(dr, dc, state.steps));
            let result = if hit { HitResult::Hit } else { HitResult::Miss };
            ai.observe(shot, result);
        }
    }
}
