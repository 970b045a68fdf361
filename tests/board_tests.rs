use broadside::{
    AttackResult, Board, BoardError, Cell, Coord, Direction, Game, STANDARD_FLEET_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn game_with(rows: usize, cols: usize, ships: &[(usize, char, &str)]) -> Game {
    let mut game = Game::new(rows, cols).unwrap();
    for &(length, symbol, name) in ships {
        game.add_ship(length, symbol, name).unwrap();
    }
    game
}

fn count(board: &Board<'_>, wanted: Cell) -> usize {
    board
        .dims()
        .cells()
        .filter(|&p| board.cell(p) == Some(wanted))
        .count()
}

#[test]
fn test_single_cell_ship_destroyed_by_one_hit() {
    let game = game_with(10, 10, &[(1, 'D', "Destroyer")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Ship('D')));

    assert_eq!(
        board.attack(Coord::new(0, 0)).unwrap(),
        AttackResult::Destroyed { ship_id: 0 }
    );
    assert_eq!(board.destroyed_ships(), &[0]);
    assert!(board.all_ships_destroyed());
}

#[test]
fn test_vertical_run_off_the_bottom_is_rejected() {
    let game = game_with(10, 10, &[(3, 'S', "Submarine")]);
    let mut board = Board::new(&game);
    assert_eq!(
        board.place_ship(Coord::new(8, 0), 0, Direction::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(count(&board, Cell::Empty), 100);
    assert!(!board.is_placed(0));

    // the same ship fits one row higher
    board
        .place_ship(Coord::new(7, 0), 0, Direction::Vertical)
        .unwrap();
    assert_eq!(count(&board, Cell::Ship('S')), 3);
}

#[test]
fn test_block_and_unblock() {
    let game = game_with(4, 4, &[(4, 'B', "Battleship")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(9);
    board.block(&mut rng);
    assert_eq!(count(&board, Cell::Blocked), 8);
    assert_eq!(count(&board, Cell::Ship('B')), 4);

    // blocked cells render as open water
    assert_eq!(board.render(false).matches('.').count(), 12);

    board.unblock();
    assert_eq!(count(&board, Cell::Blocked), 0);
    assert_eq!(count(&board, Cell::Empty), 12);
    assert_eq!(count(&board, Cell::Ship('B')), 4);
}

#[test]
fn test_block_caps_at_empty_cells() {
    let game = game_with(1, 3, &[(3, 'C', "Cruiser")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    board.block(&mut rng);
    assert_eq!(count(&board, Cell::Blocked), 0);
}

#[test]
fn test_placement_onto_blocked_cell_overlaps() {
    let game = game_with(2, 2, &[(2, 'R', "Rowboat")]);
    let mut board = Board::new(&game);
    let mut rng = broadside::SequenceRandom::new([0, 0, 1, 1]);
    board.block(&mut rng);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Blocked));
    assert_eq!(board.cell(Coord::new(1, 1)), Some(Cell::Blocked));
    for origin in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)] {
        for dir in Direction::ALL {
            assert!(board.place_ship(origin, 0, dir).is_err());
        }
    }
}

#[test]
fn test_double_placement_fails_without_mutation() {
    let game = game_with(5, 5, &[(3, 'D', "Destroyer"), (2, 'P', "Patrol boat")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(1, 1), 0, Direction::Horizontal)
        .unwrap();
    let before = board.render(false);

    assert_eq!(
        board.place_ship(Coord::new(3, 0), 0, Direction::Horizontal),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        board.place_ship(Coord::new(0, 2), 1, Direction::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place_ship(Coord::new(0, 0), 2, Direction::Vertical),
        Err(BoardError::InvalidIndex)
    );
    assert_eq!(board.render(false), before);
    assert!(board.is_placed(0));
    assert!(!board.is_placed(1));
}

#[test]
fn test_unplace_restores_the_run() {
    let game = game_with(5, 5, &[(3, 'D', "Destroyer")]);
    let mut board = Board::new(&game);
    let empty = board.render(false);
    board
        .place_ship(Coord::new(2, 1), 0, Direction::Vertical)
        .unwrap();

    // wrong run leaves everything in place
    assert_eq!(
        board.unplace_ship(Coord::new(2, 1), 0, Direction::Horizontal),
        Err(BoardError::ShipNotFound)
    );
    assert!(board.is_placed(0));

    board
        .unplace_ship(Coord::new(2, 1), 0, Direction::Vertical)
        .unwrap();
    assert_eq!(board.render(false), empty);
    assert!(!board.is_placed(0));

    // and the ship can go back down elsewhere
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();
}

#[test]
fn test_unplace_after_a_hit_is_refused() {
    let game = game_with(3, 3, &[(2, 'R', "Rowboat")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();
    assert_eq!(board.attack(Coord::new(0, 1)).unwrap(), AttackResult::Hit);
    assert_eq!(
        board.unplace_ship(Coord::new(0, 0), 0, Direction::Horizontal),
        Err(BoardError::ShipNotFound)
    );
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Ship('R')));
}

#[test]
fn test_attack_errors_leave_marker_unchanged() {
    let game = game_with(3, 3, &[(2, 'R', "Rowboat")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();

    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), AttackResult::Hit);
    assert_eq!(
        board.attack(Coord::new(0, 0)),
        Err(BoardError::AlreadyAttacked(Coord::new(0, 0)))
    );
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit));

    assert_eq!(board.attack(Coord::new(2, 2)).unwrap(), AttackResult::Miss);
    assert_eq!(
        board.attack(Coord::new(2, 2)),
        Err(BoardError::AlreadyAttacked(Coord::new(2, 2)))
    );
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Miss));

    for p in [Coord::new(-1, 0), Coord::new(0, 3), Coord::new(3, 0)] {
        assert_eq!(board.attack(p), Err(BoardError::OutOfBounds(p)));
    }
    assert!(!board.all_ships_destroyed());
}

#[test]
fn test_blocked_cell_counts_as_miss() {
    let game = game_with(2, 2, &[(1, 'D', "Dot")]);
    let mut board = Board::new(&game);
    let mut rng = broadside::SequenceRandom::new([0, 0, 1, 1]);
    board.block(&mut rng);
    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), AttackResult::Miss);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Miss));
}

#[test]
fn test_fleet_destroyed_after_exactly_all_segments() {
    let game = Game::standard();
    let mut board = Board::new(&game);
    for k in 0..game.ship_count() {
        board
            .place_ship(Coord::new(2 * k as i32, 0), k, Direction::Horizontal)
            .unwrap();
    }

    let mut hits = 0;
    let mut destroyed = Vec::new();
    for p in game.dims().cells() {
        if let Ok(result) = board.attack(p) {
            if result.is_hit() {
                hits += 1;
            }
            if let Some(id) = result.ship_id() {
                destroyed.push(id);
            }
            assert_eq!(board.all_ships_destroyed(), hits == STANDARD_FLEET_CELLS);
        }
    }
    assert_eq!(hits, STANDARD_FLEET_CELLS);
    assert_eq!(destroyed, vec![0, 1, 2, 3, 4]);
    assert_eq!(board.destroyed_ships(), destroyed.as_slice());
}

#[test]
fn test_render_and_fog() {
    let game = game_with(2, 3, &[(2, 'R', "rowboat")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Horizontal)
        .unwrap();
    assert_eq!(board.render(false), "  012\n0 RR.\n1 ...\n");

    board.attack(Coord::new(0, 0)).unwrap();
    board.attack(Coord::new(1, 2)).unwrap();
    assert_eq!(board.render(false), "  012\n0 XR.\n1 ..o\n");
    assert_eq!(board.render(true), "  012\n0 X..\n1 ..o\n");
}

#[test]
fn test_clear_forgets_everything() {
    let game = game_with(2, 3, &[(1, 'D', "dot")]);
    let mut board = Board::new(&game);
    board
        .place_ship(Coord::new(1, 1), 0, Direction::Vertical)
        .unwrap();
    board.attack(Coord::new(1, 1)).unwrap();
    assert!(board.all_ships_destroyed());

    board.clear();
    assert_eq!(count(&board, Cell::Empty), 6);
    assert!(!board.is_placed(0));
    assert!(board.destroyed_ships().is_empty());
    board
        .place_ship(Coord::new(0, 0), 0, Direction::Vertical)
        .unwrap();
}
