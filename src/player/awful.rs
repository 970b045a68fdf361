use alloc::string::String;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    coord::{Coord, Dimensions},
    game::Game,
    ship::Direction,
};

use super::Player;

/// Stacks every ship against the left edge, one per row, and fires at each
/// cell in turn starting from the bottom-right corner. Ignores all feedback.
pub struct AwfulPlayer {
    name: String,
    dims: Dimensions,
    last: Coord,
}

impl AwfulPlayer {
    pub fn new(name: &str, game: &Game) -> Self {
        Self {
            name: name.into(),
            dims: game.dims(),
            last: Coord::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, board: &mut Board<'_>) -> Result<(), BoardError> {
        for k in 0..board.game().ship_count() {
            board.place_ship(Coord::new(k as i32, 0), k, Direction::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self) -> Coord {
        if self.last.c > 0 {
            self.last.c -= 1;
        } else {
            self.last.c = self.dims.cols() as i32 - 1;
            if self.last.r > 0 {
                self.last.r -= 1;
            } else {
                self.last.r = self.dims.rows() as i32 - 1;
            }
        }
        self.last
    }

    fn record_attack_result(&mut self, _p: Coord, _result: Option<AttackResult>) {}
}
