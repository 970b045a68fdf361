//! Random scatter placement and a three-state attack loop that finds the
//! direction of a struck ship and then follows it.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    coord::{Coord, Dimensions},
    game::Game,
    random::RandomSource,
    ship::Direction,
};

use super::{memory::ShotMemory, Player};

/// Attack state of a [`GoodPlayer`].
///
/// | state          | event               | effect                                  |
/// |----------------|---------------------|-----------------------------------------|
/// | Searching      | hit, ship survives  | queue 4 neighbours, to LineSeeking       |
/// | LineSeeking    | hit, ship survives  | queue next cell along the line, to LineExploiting |
/// | LineSeeking    | ship destroyed      | clear queue, to Searching               |
/// | LineExploiting | miss                | to LineSeeking, queue kept as is        |
/// | LineExploiting | hit, ship survives  | queue next cell along the line          |
/// | LineExploiting | ship destroyed      | clear queue, to Searching               |
///
/// Running out of queued cells while picking a target drops back to Searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Searching,
    /// Trying the neighbours of `anchor` to learn which way the ship runs.
    LineSeeking { anchor: Coord },
    /// Extending a run of hits that starts at `anchor`.
    LineExploiting { anchor: Coord },
}

pub struct GoodPlayer {
    name: String,
    rng: Box<dyn RandomSource>,
    state: LineState,
    candidates: Vec<Coord>,
    shots: ShotMemory,
}

impl GoodPlayer {
    pub fn new(name: &str, game: &Game, rng: Box<dyn RandomSource>) -> Self {
        Self {
            name: name.into(),
            rng,
            state: LineState::Searching,
            candidates: Vec::new(),
            shots: ShotMemory::new(game),
        }
    }

    pub fn state(&self) -> LineState {
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

    fn dims(&self) -> Dimensions {
        self.shots.dims()
    }

    fn push_if_valid(&mut self, p: Coord) {
        if self.dims().contains(p) {
            self.candidates.push(p);
        }
    }

    /// Left, right, up, down; down ends up on top of the stack.
    fn queue_neighbours(&mut self, hit: Coord) {
        for (dr, dc) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            self.push_if_valid(hit.offset(dr, dc));
        }
    }

    /// Queue the cell one step past `hit` on the line from `anchor` through
    /// `hit`. Row offsets take precedence over column offsets.
    fn queue_line_extension(&mut self, anchor: Coord, hit: Coord) {
        let dr = (hit.r - anchor.r).signum();
        let dc = (hit.c - anchor.c).signum();
        let step = if dr != 0 { (dr, 0) } else { (0, dc) };
        if step != (0, 0) {
            self.push_if_valid(hit.offset(step.0, step.1));
        }
    }

    fn next_candidate(&mut self) -> Option<Coord> {
        while let Some(p) = self.candidates.pop() {
            if self.dims().contains(p) && !self.shots.contains(p) {
                return Some(p);
            }
        }
        None
    }
}

impl Player for GoodPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    /// Drops each ship at a random origin and orientation. A rejected
    /// placement is not retried; that ship simply stays off the board.
    fn place_ships(&mut self, board: &mut Board<'_>) -> Result<(), BoardError> {
        let dims = board.dims();
        for ship_id in 0..board.game().ship_count() {
            let origin = dims.random_point(&mut *self.rng);
            let dir = if self.rng.coin() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            if let Err(e) = board.place_ship(origin, ship_id, dir) {
                log::debug!(
                    "{}: ship {} not placed at {} {}: {}",
                    self.name,
                    ship_id,
                    origin,
                    dir,
                    e
                );
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self) -> Coord {
        let p = match self.state {
            LineState::Searching => self.shots.random_novel(&mut *self.rng),
            LineState::LineSeeking { .. } | LineState::LineExploiting { .. } => {
                match self.next_candidate() {
                    Some(p) => p,
                    None => {
                        log::debug!("{}: line lost, searching", self.name);
                        self.state = LineState::Searching;
                        self.shots.random_novel(&mut *self.rng)
                    }
                }
            }
        };
        self.shots.record(p);
        p
    }

    fn record_attack_result(&mut self, p: Coord, result: Option<AttackResult>) {
        let Some(result) = result else { return };
        self.state = match (self.state, result) {
            (LineState::Searching, AttackResult::Hit) => {
                self.queue_neighbours(p);
                LineState::LineSeeking { anchor: p }
            }
            (
                LineState::LineSeeking { .. } | LineState::LineExploiting { .. },
                AttackResult::Destroyed { .. },
            ) => {
                self.candidates.clear();
                LineState::Searching
            }
            (LineState::LineSeeking { anchor }, AttackResult::Hit) => {
                self.queue_line_extension(anchor, p);
                LineState::LineExploiting { anchor }
            }
            (LineState::LineExploiting { anchor }, AttackResult::Miss) => {
                LineState::LineSeeking { anchor }
            }
            (LineState::LineExploiting { anchor }, AttackResult::Hit) => {
                self.queue_line_extension(anchor, p);
                LineState::LineExploiting { anchor }
            }
            (state, _) => state,
        };
        log::debug!("{}: {} at {} -> {:?}", self.name, describe(result), p, self.state);
    }
}

fn describe(result: AttackResult) -> &'static str {
    match result {
        AttackResult::Miss => "miss",
        AttackResult::Hit => "hit",
        AttackResult::Destroyed { .. } => "destroyed",
    }
}
