use std::collections::HashSet;

use broadside::{
    AttackResult, AwfulPlayer, Board, Coord, Game, GoodPlayer, Player, LineState,
    SequenceRandom,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coords(list: &[(i32, i32)]) -> Vec<Coord> {
    list.iter().copied().map(Coord::from).collect()
}

fn scripted(game: &Game, values: &[usize]) -> GoodPlayer {
    GoodPlayer::new("Gus", game, Box::new(SequenceRandom::new(values.to_vec())))
}

#[test]
fn test_line_seeking_then_exploiting() {
    let game = Game::standard();
    let mut player = scripted(&game, &[5]);
    let anchor = player.recommend_attack();
    assert_eq!(anchor, Coord::new(5, 5));

    player.record_attack_result(anchor, Some(AttackResult::Hit));
    assert_eq!(player.state(), LineState::LineSeeking { anchor });
    assert_eq!(player.pending(), coords(&[(5, 4), (5, 6), (4, 5), (6, 5)]).as_slice());

    let below = player.recommend_attack();
    assert_eq!(below, Coord::new(6, 5));
    player.record_attack_result(below, Some(AttackResult::Hit));
    assert_eq!(player.state(), LineState::LineExploiting { anchor });
    assert_eq!(
        player.pending(),
        coords(&[(5, 4), (5, 6), (4, 5), (7, 5)]).as_slice()
    );

    let next = player.recommend_attack();
    assert_eq!(next, Coord::new(7, 5));
    player.record_attack_result(next, Some(AttackResult::Hit));
    assert_eq!(player.recommend_attack(), Coord::new(8, 5));
}

#[test]
fn test_miss_while_exploiting_keeps_stale_candidates() {
    let game = Game::standard();
    let mut player = scripted(&game, &[5]);
    let anchor = player.recommend_attack();
    player.record_attack_result(anchor, Some(AttackResult::Hit));
    let below = player.recommend_attack();
    player.record_attack_result(below, Some(AttackResult::Hit));
    let past = player.recommend_attack();
    assert_eq!(past, Coord::new(7, 5));

    player.record_attack_result(past, Some(AttackResult::Miss));
    assert_eq!(player.state(), LineState::LineSeeking { anchor });
    assert_eq!(player.pending(), coords(&[(5, 4), (5, 6), (4, 5)]).as_slice());

    // back up the column on the far side of the anchor
    let above = player.recommend_attack();
    assert_eq!(above, Coord::new(4, 5));
    player.record_attack_result(above, Some(AttackResult::Hit));
    assert_eq!(player.state(), LineState::LineExploiting { anchor });
    assert_eq!(player.recommend_attack(), Coord::new(3, 5));
}

#[test]
fn test_row_line_extends_sideways() {
    let game = Game::standard();
    let mut player = scripted(&game, &[2, 7]);
    let anchor = player.recommend_attack();
    assert_eq!(anchor, Coord::new(2, 7));
    player.record_attack_result(anchor, Some(AttackResult::Hit));

    // down and up miss, then right hits
    for expected in [(3, 7), (1, 7)] {
        let p = player.recommend_attack();
        assert_eq!(p, Coord::from(expected));
        player.record_attack_result(p, Some(AttackResult::Miss));
        assert_eq!(player.state(), LineState::LineSeeking { anchor });
    }
    let right = player.recommend_attack();
    assert_eq!(right, Coord::new(2, 8));
    player.record_attack_result(right, Some(AttackResult::Hit));
    assert_eq!(player.pending(), coords(&[(2, 6), (2, 9)]).as_slice());
}

#[test]
fn test_destroy_returns_to_searching() {
    let game = Game::standard();
    let mut player = scripted(&game, &[5]);
    let anchor = player.recommend_attack();
    player.record_attack_result(anchor, Some(AttackResult::Hit));
    let p = player.recommend_attack();
    player.record_attack_result(p, Some(AttackResult::Destroyed { ship_id: 4 }));
    assert_eq!(player.state(), LineState::Searching);
    assert!(player.pending().is_empty());
}

#[test]
fn test_corner_hit_queues_only_board_cells() {
    let game = Game::standard();
    let mut player = scripted(&game, &[0]);
    let corner = player.recommend_attack();
    assert_eq!(corner, Coord::new(0, 0));
    player.record_attack_result(corner, Some(AttackResult::Hit));
    assert_eq!(player.pending(), coords(&[(0, 1), (1, 0)]).as_slice());
}

#[test]
fn test_running_dry_falls_back_to_searching() {
    let mut game = Game::new(1, 2).unwrap();
    game.add_ship(2, 'R', "rowboat").unwrap();
    let mut player = scripted(&game, &[0]);
    let p = player.recommend_attack();
    player.record_attack_result(p, Some(AttackResult::Hit));
    assert_eq!(player.recommend_attack(), Coord::new(0, 1));
    player.record_attack_result(Coord::new(0, 1), Some(AttackResult::Miss));
    player.recommend_attack();
    assert_eq!(player.state(), LineState::Searching);
}

#[test]
fn test_rejected_shot_is_ignored() {
    let game = Game::standard();
    let mut player = scripted(&game, &[5]);
    let anchor = player.recommend_attack();
    player.record_attack_result(anchor, Some(AttackResult::Hit));
    let p = player.recommend_attack();
    player.record_attack_result(p, None);
    assert_eq!(player.state(), LineState::LineSeeking { anchor });
    assert_eq!(player.pending().len(), 3);
}

#[test]
fn test_placement_ignores_rejections() {
    let game = Game::standard();
    let mut board = Board::new(&game);
    // every ship aims at (0,0) horizontally; only the first lands
    let mut player = scripted(&game, &[0]);
    assert!(player.place_ships(&mut board).is_ok());
    assert!(board.is_placed(0));
    assert!((1..game.ship_count()).all(|id| !board.is_placed(id)));
}

#[test]
fn test_never_repeats_over_a_full_game() {
    for seed in [3u64, 17, 99] {
        let game = Game::standard();
        let mut target = Board::new(&game);
        AwfulPlayer::new("Target", &game)
            .place_ships(&mut target)
            .unwrap();

        let mut player = GoodPlayer::new("Gus", &game, Box::new(SmallRng::seed_from_u64(seed)));
        let mut seen = HashSet::new();
        while !target.all_ships_destroyed() {
            let p = player.recommend_attack();
            assert!(seen.insert(p), "{} fired twice", p);
            let result = target.attack(p).ok();
            assert!(result.is_some(), "{} was rejected", p);
            player.record_attack_result(p, result);
        }
        assert_eq!(player.shots_fired(), seen.len());
        assert!(seen.len() <= 100);
    }
}
