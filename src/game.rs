//! Fleet registry: board extent plus the catalog of ships both players field.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    common::{FleetError, GameError},
    config::{MAX_COLS, MAX_ROWS, RESERVED_SYMBOLS, STANDARD_FLEET},
    coord::{Coord, Dimensions},
    random::RandomSource,
    ship::ShipSpec,
};

/// Board dimensions and the validated ship catalog shared by both boards.
///
/// Ships are kept in insertion order until [`Game::reorder_by_length`] runs,
/// after which every index-based accessor answers from the longest-first view.
#[derive(Debug, Clone)]
pub struct Game {
    dims: Dimensions,
    ships: Vec<ShipSpec>,
    by_length: Option<Vec<ShipSpec>>,
}

impl Game {
    /// Create a registry for a `rows`×`cols` board with no ships.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_COLS).contains(&cols) {
            return Err(GameError::BadDimensions { rows, cols });
        }
        Ok(Self {
            dims: Dimensions::new(rows, cols),
            ships: Vec::new(),
            by_length: None,
        })
    }

    /// A 10×10 game with the classic five ships.
    pub fn standard() -> Self {
        let mut game = Self {
            dims: Dimensions::new(MAX_ROWS, MAX_COLS),
            ships: Vec::new(),
            by_length: None,
        };
        // the standard fleet always fits a full-size board
        let _ = game.add_standard_fleet();
        game
    }

    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    pub fn cols(&self) -> usize {
        self.dims.cols()
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns true if `p` lies on the board.
    pub fn is_valid(&self, p: Coord) -> bool {
        self.dims.contains(p)
    }

    /// Uniformly random cell on the board.
    pub fn random_point<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Coord {
        self.dims.random_point(rng)
    }

    /// Validate and register a ship. On error nothing is added.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<(), FleetError> {
        if self.by_length.is_some() {
            return Err(FleetError::RegistryFrozen);
        }
        if length < 1 {
            return Err(FleetError::BadLength(length));
        }
        if length > self.rows() && length > self.cols() {
            return Err(FleetError::DoesNotFit(length));
        }
        if !symbol.is_ascii() || symbol.is_ascii_control() {
            return Err(FleetError::UnprintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(FleetError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(FleetError::DuplicateSymbol(symbol));
        }
        let total = self.ships.iter().map(ShipSpec::length).sum::<usize>() + length;
        if total > self.dims.area() {
            return Err(FleetError::FleetTooLarge {
                total,
                area: self.dims.area(),
            });
        }
        self.ships.push(ShipSpec::new(length, symbol, name));
        Ok(())
    }

    /// Register the classic five-ship fleet.
    pub fn add_standard_fleet(&mut self) -> Result<(), FleetError> {
        for (length, symbol, name) in STANDARD_FLEET {
            self.add_ship(length, symbol, name)?;
        }
        Ok(())
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Ships in their current order (longest-first once reordered).
    pub fn ships(&self) -> &[ShipSpec] {
        self.by_length.as_deref().unwrap_or(&self.ships)
    }

    /// Ships in the order they were registered.
    pub fn insertion_order(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn ship(&self, ship_id: usize) -> Option<&ShipSpec> {
        self.ships().get(ship_id)
    }

    pub fn ship_length(&self, ship_id: usize) -> Option<usize> {
        self.ship(ship_id).map(ShipSpec::length)
    }

    pub fn ship_symbol(&self, ship_id: usize) -> Option<char> {
        self.ship(ship_id).map(ShipSpec::symbol)
    }

    pub fn ship_name(&self, ship_id: usize) -> Option<&str> {
        self.ship(ship_id).map(ShipSpec::name)
    }

    /// Index of the ship drawn with `symbol` in the current order.
    pub fn ship_id_by_symbol(&self, symbol: char) -> Option<usize> {
        self.ships().iter().position(|s| s.symbol() == symbol)
    }

    /// Sort the catalog longest-first for placement. Happens once; equal
    /// lengths keep their registration order. Later calls do nothing.
    pub fn reorder_by_length(&mut self) {
        if self.by_length.is_some() {
            return;
        }
        let mut sorted = self.ships.clone();
        sorted.sort_by(|a, b| b.length().cmp(&a.length()));
        log::debug!(
            "fleet reordered for placement: {:?}",
            sorted.iter().map(ShipSpec::symbol).collect::<Vec<_>>()
        );
        self.by_length = Some(sorted);
    }

    pub fn is_reordered(&self) -> bool {
        self.by_length.is_some()
    }
}
