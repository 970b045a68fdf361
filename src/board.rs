//! One player's grid: ship placement, blocking, attacks and destruction tracking.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::{
    common::{AttackResult, BoardError},
    config::{EMPTY_MARKER, HIT_MARKER, MISS_MARKER},
    coord::{Coord, Dimensions},
    game::Game,
    random::RandomSource,
    ship::{Direction, ShipSpec},
};

/// Marker held by a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Scratch marker used while searching for a placement.
    Blocked,
    Ship(char),
    Miss,
    Hit,
}

impl Cell {
    /// True once the cell has been fired at.
    pub fn is_shot(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }
}

/// A player's board, bound to the registry that defines its ships.
#[derive(Clone)]
pub struct Board<'g> {
    game: &'g Game,
    cells: Vec<Cell>,
    placed: Vec<char>,
    destroyed: Vec<usize>,
}

impl<'g> Board<'g> {
    /// Create an empty board with the registry's dimensions.
    pub fn new(game: &'g Game) -> Self {
        Board {
            game,
            cells: vec![Cell::Empty; game.dims().area()],
            placed: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Registry this board was built from.
    pub fn game(&self) -> &'g Game {
        self.game
    }

    pub fn dims(&self) -> Dimensions {
        self.game.dims()
    }

    /// Marker at `p`, or `None` off the board.
    pub fn cell(&self, p: Coord) -> Option<Cell> {
        self.dims().index(p).map(|i| self.cells[i])
    }

    /// Reset every cell to empty and forget placements and destructions.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
        self.placed.clear();
        self.destroyed.clear();
    }

    /// Block half of the board (rounded down) at random. Only empty cells are
    /// eligible, so a board with fewer empty cells blocks all of them.
    ///
    /// After `16 * area` draws the remaining quota is taken from the first
    /// empty cells in row-major order.
    pub fn block<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let dims = self.dims();
        let empty = self.cells.iter().filter(|c| **c == Cell::Empty).count();
        let target = (dims.area() / 2).min(empty);
        let mut budget = dims.area() * 16;
        let mut blocked = 0;
        while blocked < target {
            let idx = if budget > 0 {
                budget -= 1;
                dims.index(dims.random_point(rng))
            } else {
                self.cells.iter().position(|c| *c == Cell::Empty)
            };
            if let Some(i) = idx {
                if self.cells[i] == Cell::Empty {
                    self.cells[i] = Cell::Blocked;
                    blocked += 1;
                }
            }
        }
    }

    /// Turn every blocked cell back into an empty one.
    pub fn unblock(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Blocked) {
            *cell = Cell::Empty;
        }
    }

    /// Returns true if ship `ship_id` is currently on this board.
    pub fn is_placed(&self, ship_id: usize) -> bool {
        self.game
            .ship_symbol(ship_id)
            .is_some_and(|s| self.placed.contains(&s))
    }

    /// Place ship `ship_id` with its top-or-left cell at `origin`.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        ship_id: usize,
        dir: Direction,
    ) -> Result<(), BoardError> {
        let spec = self.spec(ship_id)?;
        if self.placed.contains(&spec.symbol()) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let run = self.run_indices(origin, spec.length(), dir)?;
        if run.iter().any(|&i| self.cells[i] != Cell::Empty) {
            return Err(BoardError::ShipOverlaps);
        }
        for &i in &run {
            self.cells[i] = Cell::Ship(spec.symbol());
        }
        self.placed.push(spec.symbol());
        Ok(())
    }

    /// Remove ship `ship_id` from the run starting at `origin`. The whole run
    /// must still show that ship's symbol.
    pub fn unplace_ship(
        &mut self,
        origin: Coord,
        ship_id: usize,
        dir: Direction,
    ) -> Result<(), BoardError> {
        let spec = self.spec(ship_id)?;
        let symbol = spec.symbol();
        let run = self.run_indices(origin, spec.length(), dir)?;
        if run.iter().any(|&i| self.cells[i] != Cell::Ship(symbol)) {
            return Err(BoardError::ShipNotFound);
        }
        for &i in &run {
            self.cells[i] = Cell::Empty;
        }
        self.placed.retain(|&s| s != symbol);
        Ok(())
    }

    /// Fire at `p`.
    ///
    /// Off-board targets and cells already shot are rejected untouched.
    /// A hit rescans the whole grid for the struck ship's remaining segments;
    /// when none are left the ship is recorded as destroyed.
    pub fn attack(&mut self, p: Coord) -> Result<AttackResult, BoardError> {
        let idx = self.dims().index(p).ok_or(BoardError::OutOfBounds(p))?;
        match self.cells[idx] {
            Cell::Miss | Cell::Hit => Err(BoardError::AlreadyAttacked(p)),
            Cell::Ship(symbol) => {
                self.cells[idx] = Cell::Hit;
                if self.cells.contains(&Cell::Ship(symbol)) {
                    return Ok(AttackResult::Hit);
                }
                match self.game.ship_id_by_symbol(symbol) {
                    Some(ship_id) => {
                        self.destroyed.push(ship_id);
                        Ok(AttackResult::Destroyed { ship_id })
                    }
                    None => Ok(AttackResult::Hit),
                }
            }
            Cell::Empty | Cell::Blocked => {
                self.cells[idx] = Cell::Miss;
                Ok(AttackResult::Miss)
            }
        }
    }

    /// Ids of destroyed ships in the order they went down.
    pub fn destroyed_ships(&self) -> &[usize] {
        &self.destroyed
    }

    /// Returns true when every registered ship has been destroyed.
    pub fn all_ships_destroyed(&self) -> bool {
        self.destroyed.len() == self.game.ship_count()
    }

    /// Text rendering: a header of column numbers, then one line per row.
    /// With `shots_only` the ships are hidden and only hits and misses show.
    pub fn render(&self, shots_only: bool) -> String {
        let dims = self.dims();
        let mut out = String::from("  ");
        for c in 0..dims.cols() {
            let _ = write!(out, "{}", c);
        }
        out.push('\n');
        for r in 0..dims.rows() {
            let _ = write!(out, "{} ", r);
            for c in 0..dims.cols() {
                let ch = match self.cells[r * dims.cols() + c] {
                    Cell::Empty | Cell::Blocked => EMPTY_MARKER,
                    Cell::Hit => HIT_MARKER,
                    Cell::Miss => MISS_MARKER,
                    Cell::Ship(_) if shots_only => EMPTY_MARKER,
                    Cell::Ship(symbol) => symbol,
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    /// Print [`Board::render`] to stdout.
    #[cfg(feature = "std")]
    pub fn display(&self, shots_only: bool) {
        std::print!("{}", self.render(shots_only));
    }

    fn spec(&self, ship_id: usize) -> Result<&'g ShipSpec, BoardError> {
        self.game.ship(ship_id).ok_or(BoardError::InvalidIndex)
    }

    fn run_indices(
        &self,
        origin: Coord,
        length: usize,
        dir: Direction,
    ) -> Result<Vec<usize>, BoardError> {
        let dims = self.dims();
        dir.run(origin, length)
            .map(|p| dims.index(p).ok_or(BoardError::ShipOutOfBounds))
            .collect()
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ placed: {:?}, destroyed: {:?} }}",
            self.placed, self.destroyed
        )?;
        f.write_str(&self.render(false))
    }
}
