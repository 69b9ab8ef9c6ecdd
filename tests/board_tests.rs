use broadside::{
    Board, Cell, Coordinate, Fleet, HitResult, Orientation, PlacementError, ShipType, Symbol,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_single_cell_ship_sinks_and_ends_game() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(1).unwrap();
    board.place(ShipType::new(1), 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire_at("A1", &mut fleet), HitResult::Sunk);
    assert!(board.is_game_over());
    assert_eq!(fleet.remaining_for(1), 0);
}

#[test]
fn test_three_cell_ship_hit_hit_sunk() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(3).unwrap();
    board.place(ShipType::new(3), 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire_at("D1", &mut fleet), HitResult::Miss);
    assert_eq!(fleet.remaining_for(3), 3);

    assert_eq!(board.fire_at("A1", &mut fleet), HitResult::Hit);
    assert_eq!(board.fire_at("b1", &mut fleet), HitResult::Hit);
    assert_eq!(board.fire_at("C1", &mut fleet), HitResult::Sunk);
    assert_eq!(fleet.remaining_for(3), 0);
}

#[test]
fn test_repeat_shot_is_a_noop_miss() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(2).unwrap();
    board.place(ShipType::new(2), 4, 4, Orientation::Vertical).unwrap();

    assert_eq!(board.fire(4, 4, &mut fleet), HitResult::Hit);
    let before = board.clone();
    assert_eq!(board.fire(4, 4, &mut fleet), HitResult::Miss);
    assert_eq!(fleet.remaining_for(2), 1);
    assert_eq!(board, before);

    assert_eq!(board.fire(0, 0, &mut fleet), HitResult::Miss);
    assert_eq!(board.fire(0, 0, &mut fleet), HitResult::Miss);
    assert_eq!(board.cell(0, 0), Some(Cell::Miss));
}

#[test]
fn test_malformed_and_off_board_shots_degrade_to_miss() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(1).unwrap();
    board.place(ShipType::new(1), 0, 0, Orientation::Horizontal).unwrap();
    let before = board.clone();

    for bad in ["", "Z9", "A11", "hello", "A0"] {
        assert_eq!(board.fire_at(bad, &mut fleet), HitResult::Miss);
    }
    assert_eq!(board.fire(10, 3, &mut fleet), HitResult::Miss);
    assert_eq!(board, before);
    assert_eq!(fleet.remaining_for(1), 1);
}

#[test]
fn test_place_reports_reason() {
    let mut board = Board::new();
    assert_eq!(
        board.place(ShipType::new(3), 0, 8, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.place(ShipType::new(2), 9, 0, Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.place(ShipType::new(1), 10, 0, Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );

    board.place(ShipType::new(3), 2, 2, Orientation::Vertical).unwrap();
    assert_eq!(
        board.place(ShipType::new(4), 3, 0, Orientation::Horizontal),
        Err(PlacementError::Overlap)
    );
    // a failed placement leaves the board untouched
    assert!(board.is_empty(3, 0));
    assert!(board.is_empty(3, 1));
    assert_eq!(board.cell(3, 2), Some(Cell::Ship(3)));
}

#[test]
fn test_airstrike_marks_row_without_touching_fleet() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(3).unwrap();
    board.place(ShipType::new(3), 5, 0, Orientation::Horizontal).unwrap();
    board.place(ShipType::new(2), 4, 9, Orientation::Vertical).unwrap();
    board.fire(5, 5, &mut fleet);

    let hits = board.perform_airstrike(5);
    assert_eq!(hits, 4);
    for col in 0..10 {
        assert!(board.cell(5, col).unwrap().is_resolved());
    }
    assert_eq!(fleet.remaining_for(3), 3);
    assert_eq!(fleet.remaining_for(2), 2);
    assert!(!board.is_game_over());

    // striking the same row again finds nothing new
    assert_eq!(board.perform_airstrike(5), 0);
    assert_eq!(board.perform_airstrike(42), 0);

    assert_eq!(board.perform_airstrike(4), 1);
    assert!(board.is_game_over());
}

#[test]
fn test_views_mask_ships_for_opponent() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(2).unwrap();
    board.place(ShipType::new(2), 0, 0, Orientation::Horizontal).unwrap();
    board.fire(0, 0, &mut fleet);
    board.fire(9, 9, &mut fleet);

    let own = board.own_view();
    let masked = board.opponent_view();
    assert_eq!(own[0][0], Symbol::Hit);
    assert_eq!(own[0][1], Symbol::Ship);
    assert_eq!(masked[0][1], Symbol::Open);
    assert_eq!(masked[9][9], Symbol::Miss);
    assert_eq!(own[5][5].as_char(), '~');
    assert!(own.iter().flatten().all(|s| *s != Symbol::Sunk));
}

#[test]
fn test_random_placement_all_ships_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = Fleet::new(5).unwrap();

    broadside::place_fleet_randomly(&mut rng, &mut board, &fleet).unwrap();
    assert_eq!(board.ship_cells().count(), fleet.cells_remaining());
    for ship in fleet.ship_types() {
        let cells = board
            .ship_cells()
            .filter(|c| board.cell(c.row, c.col) == Some(Cell::Ship(ship.id())))
            .count();
        assert_eq!(cells, ship.length());
    }
}

#[test]
fn test_off_board_coordinate_misses_and_still_prints() {
    let mut board = Board::new();
    let mut fleet = Fleet::new(1).unwrap();
    board.place(ShipType::new(1), 0, 0, Orientation::Horizontal).unwrap();

    let stray = Coordinate { row: 0, col: 200 };
    assert_eq!(board.fire(stray.row, stray.col, &mut fleet), HitResult::Miss);
    assert!(!board.is_resolved(stray));
    assert_eq!(stray.to_string(), "(0, 200)");
    assert_eq!(Coordinate { row: usize::MAX, col: 3 }.to_string(), format!("({}, 3)", usize::MAX));
    assert_eq!(Coordinate { row: 9, col: 9 }.to_string(), "J10");
}
