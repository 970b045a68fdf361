//! Backtracking placement over a half-blocked board, and a hunt/target
//! attack loop driven by a stack of follow-up candidates.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::{PLACEMENT_ATTEMPTS, FOLLOW_UP_REACH},
    coord::Coord,
    game::Game,
    random::RandomSource,
    ship::Direction,
};

use super::{memory::ShotMemory, Player};

/// Attack mode of a [`MediocrePlayer`].
///
/// | mode      | event                | effect                                  |
/// |-----------|----------------------|-----------------------------------------|
/// | Hunting   | hit, ship survives   | queue the follow-up cross, to Targeting |
/// | Targeting | hit, ship destroyed  | drop queued candidates, to Hunting      |
/// | Targeting | queue runs dry       | random shot, to Hunting                 |
///
/// Any other feedback leaves the mode unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntState {
    /// Firing at random fresh cells.
    Hunting,
    /// Working through the candidates queued around `anchor`.
    Targeting { anchor: Coord },
}

pub struct MediocrePlayer {
    name: String,
    rng: Box<dyn RandomSource>,
    state: HuntState,
    candidates: Vec<Coord>,
    shots: ShotMemory,
}

impl MediocrePlayer {
    pub fn new(name: &str, game: &Game, rng: Box<dyn RandomSource>) -> Self {
        Self {
            name: name.into(),
            rng,
            state: HuntState::Hunting,
            candidates: Vec::new(),
            shots: ShotMemory::new(game),
        }
    }

    pub fn state(&self) -> HuntState {
        self.state
    }

    /// Queued candidates, bottom of the stack first.
    pub fn pending(&self) -> &[Coord] {
        &self.candidates
    }

    /// Number of distinct cells recommended so far.
    pub fn shots_fired(&self) -> usize {
        self.shots.len()
    }

    /// Queue cells up to `FOLLOW_UP_REACH` away along the hit's row and column:
    /// first the down/right arms interleaved, then the up/left arms, so the
    /// far end of the left arm is tried first.
    fn queue_cross(&mut self, hit: Coord) {
        for i in 1..=FOLLOW_UP_REACH {
            self.candidates.push(hit.offset(i, 0));
            self.candidates.push(hit.offset(0, i));
        }
        for i in 1..=FOLLOW_UP_REACH {
            self.candidates.push(hit.offset(-i, 0));
            self.candidates.push(hit.offset(0, -i));
        }
    }

    /// Pop until an on-board cell not yet fired at appears.
    fn next_candidate(&mut self) -> Option<Coord> {
        while let Some(p) = self.candidates.pop() {
            if self.shots.dims().contains(p) && !self.shots.contains(p) {
                return Some(p);
            }
        }
        None
    }
}

/// Depth-first search placing ships `ship_id..` on `board`. Candidates are
/// tried in `cells` order, horizontal before vertical; a placement is undone
/// before the next option is tried.
pub(crate) fn place_from(board: &mut Board<'_>, cells: &[Coord], ship_id: usize) -> bool {
    if ship_id >= board.game().ship_count() {
        return true;
    }
    for &p in cells {
        for dir in Direction::ALL {
            if board.place_ship(p, ship_id, dir).is_ok() {
                if place_from(board, cells, ship_id + 1) {
                    return true;
                }
                let _ = board.unplace_ship(p, ship_id, dir);
            }
        }
    }
    false
}

impl Player for MediocrePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, board: &mut Board<'_>) -> Result<(), BoardError> {
        let cells: Vec<Coord> = board.dims().cells().collect();
        for attempt in 1..=PLACEMENT_ATTEMPTS {
            board.block(&mut *self.rng);
            let placed = place_from(board, &cells, 0);
            board.unblock();
            if placed {
                log::debug!("{}: fleet placed on attempt {}", self.name, attempt);
                return Ok(());
            }
        }
        log::warn!(
            "{}: no placement found after {} attempts",
            self.name,
            PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip)
    }

    fn recommend_attack(&mut self) -> Coord {
        let p = match self.state {
            HuntState::Hunting => self.shots.random_novel(&mut *self.rng),
            HuntState::Targeting { .. } => match self.next_candidate() {
                Some(p) => p,
                None => {
                    log::debug!("{}: candidates exhausted, back to hunting", self.name);
                    self.state = HuntState::Hunting;
                    self.shots.random_novel(&mut *self.rng)
                }
            },
        };
        self.shots.record(p);
        p
    }

    fn record_attack_result(&mut self, p: Coord, result: Option<AttackResult>) {
        let Some(result) = result else { return };
        match (self.state, result) {
            (HuntState::Hunting, AttackResult::Hit) => {
                self.queue_cross(p);
                self.state = HuntState::Targeting { anchor: p };
                log::debug!("{}: hit at {}, targeting", self.name, p);
            }
            (HuntState::Targeting { .. }, AttackResult::Destroyed { ship_id }) => {
                self.candidates.clear();
                self.state = HuntState::Hunting;
                log::debug!("{}: ship {} destroyed, hunting", self.name, ship_id);
            }
            _ => {}
        }
    }
}
